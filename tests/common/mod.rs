#![allow(dead_code)]

pub mod temp_files {
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Write `content` to a temporary file with the given extension
    ///
    /// The file is removed when the returned handle is dropped.
    pub fn create_temp_table(content: &str, ext: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new()
            .prefix("trierouter_test_")
            .suffix(&format!(".{ext}"))
            .tempfile()
            .unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    pub fn create_temp_yaml(content: &str) -> NamedTempFile {
        create_temp_table(content, "yaml")
    }

    pub fn create_temp_json(content: &str) -> NamedTempFile {
        create_temp_table(content, "json")
    }
}

/// Route table used across integration tests
pub fn zoo_table() -> &'static str {
    r#"
routes:
  - path: /
    handlers:
      GET: root_handler
  - path: /zoo/animals
    handlers:
      GET: get_animals
      POST: create_animal
  - path: /zoo/animals/{id}
    handlers:
      GET: get_animal
      PUT: update_animal
      PATCH: patch_animal
      DELETE: delete_animal
  - path: /zoo/animals/{id:^\d+$}
    handlers:
      GET: get_animal_by_number
  - path: /zoo/animals/{id:^\d+$}/toys/{toy_id}
    handlers:
      GET: animal_toy
  - path: /zoo/animals/{id}/toys/{toy_id}
    handlers:
      GET: named_animal_toy
  - path: /zoo/animals/featured
    handlers:
      GET: featured_animal
  - path: /zoo/health
    handlers:
      HEAD: health_check
      OPTIONS: supported_ops
      TRACE: trace_route
"#
}
