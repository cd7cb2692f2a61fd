//! Project export

use std::path::Path;

use super::SceneState;

impl SceneState {
    /// Pretty-printed JSON array of every cube
    pub fn project_json(&self) -> Result<String, String> {
        shared::project_json(&self.cubes).map_err(|e| format!("Failed to serialize project: {e}"))
    }

    /// Write the project file to `path`
    pub fn save_project(&self, path: &Path) -> Result<(), String> {
        let json = self.project_json()?;
        std::fs::write(path, json)
            .map_err(|e| format!("Failed to write {}: {e}", path.display()))?;
        tracing::info!("Saved {} cubes to {}", self.cubes.len(), path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_project_writes_file() {
        let scene = SceneState::default();
        let path = std::env::temp_dir().join(format!(
            "cubes_editor_save_{}.json",
            std::process::id()
        ));
        scene.save_project(&path).unwrap();
        let json = std::fs::read_to_string(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        assert_eq!(shared::parse_project_json(&json).unwrap(), scene.cubes());
    }

    #[test]
    fn test_save_project_bad_path() {
        let scene = SceneState::default();
        let path = std::env::temp_dir()
            .join("cubes_editor_missing_dir")
            .join("nested")
            .join(shared::PROJECT_FILE_NAME);
        assert!(scene.save_project(&path).is_err());
    }
}
