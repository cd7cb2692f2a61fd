use std::sync::atomic::{AtomicU8, Ordering};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Lang {
    #[default]
    Es,
    En,
}

static CURRENT_LANG: AtomicU8 = AtomicU8::new(0); // 0=Es (default)

pub fn lang() -> Lang {
    match CURRENT_LANG.load(Ordering::Relaxed) {
        1 => Lang::En,
        _ => Lang::Es,
    }
}

pub fn set_lang(l: Lang) {
    CURRENT_LANG.store(
        match l {
            Lang::Es => 0,
            Lang::En => 1,
        },
        Ordering::Relaxed,
    );
}

/// Translate a key to the current language.
pub fn t(key: &str) -> &'static str {
    let es = lang() == Lang::Es;
    match key {
        // ── Main menus ──────────────────────────────────────
        "menu.file" => if es { "Archivo" } else { "File" },
        "menu.save" => if es { "Guardar proyecto..." } else { "Save project..." },
        "menu.quit" => if es { "Salir" } else { "Quit" },
        "menu.view" => if es { "Ver" } else { "View" },
        "menu.instructions" => if es { "Instrucciones" } else { "Instructions" },
        "menu.reset_camera" => if es { "Restablecer cámara" } else { "Reset camera" },
        "menu.language" => if es { "Idioma" } else { "Language" },
        "menu.settings" => if es { "Ajustes..." } else { "Settings..." },

        // ── Control panel ───────────────────────────────────
        "ctl.debug_mode" => if es { "Modo Debug" } else { "Debug mode" },
        "ctl.add_cube" => if es { "Añadir Cubo" } else { "Add cube" },
        "ctl.delete_cube" => if es { "Eliminar Cubo" } else { "Delete cube" },
        "ctl.save_project" => if es { "Guardar Proyecto" } else { "Save project" },
        "ctl.save_title" => if es { "Guardar proyecto JSON" } else { "Save project JSON" },
        "ctl.info" => if es { "Info" } else { "Info" },

        // ── Edit panel ──────────────────────────────────────
        "edit.title" => if es { "Editar cubo" } else { "Edit cube" },
        "edit.width" => if es { "Ancho" } else { "Width" },
        "edit.height" => if es { "Alto" } else { "Height" },
        "edit.depth" => if es { "Profundidad" } else { "Depth" },
        "edit.color" => if es { "Color" } else { "Color" },
        "edit.position" => if es { "Posición" } else { "Position" },
        "edit.apply" => if es { "Aplicar" } else { "Apply" },

        // ── Rotation indicator ──────────────────────────────
        "rot.label" => if es { "Rotación" } else { "Rotation" },
        "rot.locked" => if es { "Bloqueada" } else { "Locked" },
        "rot.unlocked" => if es { "Desbloqueada" } else { "Unlocked" },

        // ── Instructions ────────────────────────────────────
        "help.title" => if es { "Instrucciones:" } else { "Instructions:" },
        "help.1" => if es { "Activa el modo Debug para interactuar" } else { "Enable debug mode to interact" },
        "help.2" => if es { "Haz clic en un cubo para seleccionarlo" } else { "Click a cube to select it" },
        "help.3" => if es { "Edita las dimensiones y el color, luego haz clic en Aplicar" } else { "Edit dimensions and color, then click Apply" },
        "help.4" => if es { "Arrastra el cubo para moverlo (la posición se guarda al soltar)" } else { "Drag the cube to move it (the position is stored on release)" },
        "help.5" => if es { "Desactiva el modo Debug para cambiar colores aleatoriamente" } else { "Disable debug mode to randomize colors on click" },
        "help.6" => if es { "Presiona ESPACIO para bloquear/desbloquear la rotación de la escena" } else { "Press SPACE to lock/unlock scene rotation" },
        "help.7" => if es { "Haz clic en \"Añadir Cubo\" para crear un nuevo cubo" } else { "Click \"Add cube\" to create a new cube" },
        "help.8" => if es { "Haz clic en \"Eliminar Cubo\" para borrar el cubo seleccionado" } else { "Click \"Delete cube\" to remove the selected cube" },
        "help.9" => if es { "Haz clic en \"Guardar Proyecto\" para descargar el estado actual" } else { "Click \"Save project\" to export the current state" },

        // ── Status bar ──────────────────────────────────────
        "status.cubes" => if es { "Cubos" } else { "Cubes" },
        "status.selected" => if es { "Seleccionado" } else { "Selected" },
        "status.none" => if es { "ninguno" } else { "none" },
        "status.debug" => if es { "DEBUG" } else { "DEBUG" },
        "status.nav_hint" => if es {
            "Arrastrar: orbitar · Botón derecho: desplazar · Rueda: zoom"
        } else {
            "Drag: orbit · Right button: pan · Wheel: zoom"
        },

        // ── Settings window ─────────────────────────────────
        "settings.title" => if es { "Ajustes" } else { "Settings" },
        "settings.font_size" => if es { "Tamaño de fuente" } else { "Font size" },
        "settings.background" => if es { "Fondo" } else { "Background" },
        "settings.selection" => if es { "Selección" } else { "Selection" },
        "settings.axis_labels" => if es { "Etiquetas de ejes" } else { "Axis labels" },
        "settings.viewport" => if es { "Vista 3D" } else { "Viewport" },
        "settings.ui" => if es { "Interfaz" } else { "Interface" },
        "settings.reset" => if es { "Restablecer" } else { "Reset" },
        "settings.close" => if es { "Cerrar" } else { "Close" },

        _ => "???",
    }
}

/// Help lines shown in the instructions panel, in display order
pub const HELP_KEYS: [&str; 9] = [
    "help.1", "help.2", "help.3", "help.4", "help.5", "help.6", "help.7", "help.8", "help.9",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_keys_translated() {
        for key in HELP_KEYS {
            assert_ne!(t(key), "???", "{key}");
        }
    }

    #[test]
    fn test_status_bar_keys_translated() {
        for key in ["status.cubes", "status.selected", "status.none", "status.debug", "status.nav_hint"] {
            assert_ne!(t(key), "???", "{key}");
        }
    }

    #[test]
    fn test_unknown_key() {
        assert_eq!(t("no.such.key"), "???");
    }
}
