//! Selección de steps por etiquetas.

use serde_json::json;

use super::DeployStep;
use crate::hashing::hash_value;

/// Índices de los steps a ejecutar, en orden de declaración.
///
/// Un step entra si alguna de sus etiquetas está pedida; sus dependencias se
/// agregan a las etiquetas pedidas hasta alcanzar un punto fijo. Una lista
/// vacía selecciona todos los steps. Etiquetas desconocidas no seleccionan
/// nada y no son error.
pub fn select_steps(steps: &[Box<dyn DeployStep>], tags: &[&str]) -> Vec<usize> {
    if tags.is_empty() {
        return (0..steps.len()).collect();
    }
    let mut wanted: Vec<String> = tags.iter().map(|t| t.to_string()).collect();
    let mut selected = vec![false; steps.len()];
    loop {
        let mut changed = false;
        for (i, step) in steps.iter().enumerate() {
            if selected[i] || !step.tags().iter().any(|t| wanted.iter().any(|w| w == t)) {
                continue;
            }
            selected[i] = true;
            changed = true;
            for dep in step.dependencies() {
                if !wanted.iter().any(|w| w == dep) {
                    wanted.push(dep.to_string());
                }
            }
        }
        if !changed {
            break;
        }
    }
    selected.iter()
            .enumerate()
            .filter_map(|(i, s)| s.then_some(i))
            .collect()
}

/// Hash de la lista ordenada de ids seleccionados.
pub fn definition_hash(step_ids: &[&str]) -> String {
    hash_value(&json!(step_ids))
}
