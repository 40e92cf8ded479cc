// src/data.rs

use crate::model::TopicPath;
use serde_yaml;

/// Carga la definición de la ruta de aprendizaje desde el YAML embebido
pub fn read_learning_path_embedded() -> Vec<TopicPath> {
    let file_content = include_str!("data/learning_path.yaml");
    serde_yaml::from_str(file_content).expect("No se pudo parsear la ruta de aprendizaje YAML")
}
