//! Config field documentation: the single source of truth for descriptions.
//!
//! Used by:
//! - `termcfg show` to annotate TOML output with inline comments
//! - `cargo xtask gen-docs` to generate `docs/Configuration.md`

use toml_edit::{Decor, DocumentMut, Item, Table, TomlError};

use super::types::ColorRole;

/// Documentation for a config section.
pub struct SectionDoc {
    /// TOML table name; empty for the top-level keys
    pub name: &'static str,
    /// Human-readable description of the section
    pub description: &'static str,
    /// Fields in this section
    pub fields: &'static [FieldDoc],
}

/// Documentation for a config field.
pub struct FieldDoc {
    /// Field name as it appears in TOML
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Accepted values, for the reference table
    pub constraint: &'static str,
}

/// Config sections in canonical display order.
pub const CONFIG_SECTIONS: &[SectionDoc] = &[
    SectionDoc {
        name: "",
        description: "Font, grid and line-ending settings",
        fields: &[
            FieldDoc {
                name: "fontFamily",
                description: "Font stack used by the terminal surface",
                constraint: "non-empty string",
            },
            FieldDoc {
                name: "enableBold",
                description: "Allow bold glyph rendering",
                constraint: "boolean",
            },
            FieldDoc {
                name: "cols",
                description: "Grid width in character cells",
                constraint: "integer, 1-65535",
            },
            FieldDoc {
                name: "rows",
                description: "Grid height in character cells",
                constraint: "integer, 1-65535",
            },
            FieldDoc {
                name: "fontSize",
                description: "Font size in pixels",
                constraint: "number > 0",
            },
            FieldDoc {
                name: "lineHeight",
                description: "Line height multiplier",
                constraint: "number >= 0",
            },
            FieldDoc {
                name: "letterSpacing",
                description: "Extra spacing between characters in pixels",
                constraint: "number >= 0",
            },
            FieldDoc {
                name: "convertEol",
                description: "Render a bare LF as CR LF",
                constraint: "boolean",
            },
        ],
    },
    SectionDoc {
        name: "theme",
        description: "Color palette. Every role is required; colors are #RRGGBB",
        fields: &[
            FieldDoc {
                name: "background",
                description: "Default background",
                constraint: "#RRGGBB",
            },
            FieldDoc {
                name: "foreground",
                description: "Default text color",
                constraint: "#RRGGBB",
            },
            FieldDoc {
                name: "cursor",
                description: "Cursor block color",
                constraint: "#RRGGBB",
            },
            FieldDoc {
                name: "cursorAccent",
                description: "Text color under the cursor",
                constraint: "#RRGGBB",
            },
            FieldDoc {
                name: "selectionBackground",
                description: "Background of selected text",
                constraint: "#RRGGBB",
            },
        ],
    },
];

/// Description for an ANSI palette role (black..brightWhite).
fn ansi_role_description(role: ColorRole) -> Option<String> {
    role.ansi_index()
        .map(|index| format!("ANSI color {} ({})", index, role))
}

/// Annotate a serialized TOML config string with inline documentation comments.
///
/// Comments are attached as decor on the parsed document, so values
/// (including multi-line strings) are reproduced exactly. The sixteen ANSI
/// palette roles are described by their palette index.
pub fn annotate_config(toml_str: &str) -> Result<String, TomlError> {
    let mut doc: DocumentMut = toml_str.parse()?;
    annotate_table(doc.as_table_mut(), "");

    let table_names: Vec<String> = doc
        .iter()
        .filter(|(_, item)| item.is_table())
        .map(|(name, _)| name.to_string())
        .collect();
    for name in table_names {
        if let Some(table) = doc.get_mut(&name).and_then(Item::as_table_mut) {
            if let Some(section) = CONFIG_SECTIONS.iter().find(|s| s.name == name) {
                prepend_comment(table.decor_mut(), section.description);
            }
            annotate_table(table, &name);
        }
    }

    Ok(doc.to_string())
}

/// Comment every documented value key of `table`.
fn annotate_table(table: &mut Table, section: &str) {
    let keys: Vec<String> = table
        .iter()
        .filter(|(_, item)| item.is_value())
        .map(|(key, _)| key.to_string())
        .collect();
    for name in keys {
        if let (Some(description), Some(mut key)) = (describe(section, &name), table.key_mut(&name))
        {
            prepend_comment(key.leaf_decor_mut(), &description);
        }
    }
}

fn describe(section: &str, key: &str) -> Option<String> {
    let documented = CONFIG_SECTIONS
        .iter()
        .filter(|s| s.name == section)
        .flat_map(|s| s.fields.iter())
        .find(|field| field.name == key)
        .map(|field| field.description.to_string());
    if documented.is_some() || section != "theme" {
        return documented;
    }
    ColorRole::from_name(key).and_then(ansi_role_description)
}

fn prepend_comment(decor: &mut Decor, text: &str) {
    let existing = decor
        .prefix()
        .and_then(|prefix| prefix.as_str())
        .unwrap_or("")
        .to_string();
    decor.set_prefix(format!("{}# {}\n", existing, text));
}

/// Generate the Configuration reference page as markdown.
pub fn generate_config_markdown() -> String {
    let mut md = String::new();

    md.push_str(
        "<!-- This file is auto-generated by `cargo xtask gen-docs`. Do not edit manually. -->\n\n",
    );
    md.push_str("# Configuration\n\n");
    md.push_str("termcfg reads `~/.config/termcfg/terminal.toml` unless a file is given.\n");
    md.push_str("JSON files (`.json`) use the same keys. All keys are required.\n\n");
    md.push_str("## Quick Commands\n\n");
    md.push_str("```bash\n");
    md.push_str("termcfg check            # Validate the configuration\n");
    md.push_str("termcfg show             # Print it with inline documentation\n");
    md.push_str("termcfg export           # Print xterm.js options as JSON\n");
    md.push_str("termcfg preview          # Show the palette in truecolor\n");
    md.push_str("```\n\n");

    for section in CONFIG_SECTIONS {
        if section.name.is_empty() {
            md.push_str("## Top-level keys\n\n");
        } else {
            md.push_str(&format!("## [{}]\n\n", section.name));
        }
        md.push_str(&format!("{}\n\n", section.description));
        md.push_str("| Key | Accepts | Description |\n");
        md.push_str("|-----|---------|-------------|\n");
        for field in section.fields {
            md.push_str(&format!(
                "| `{}` | {} | {} |\n",
                field.name, field.constraint, field.description
            ));
        }
        if section.name == "theme" {
            for role in ColorRole::ALL {
                if let Some(desc) = ansi_role_description(role) {
                    md.push_str(&format!("| `{}` | #RRGGBB | {} |\n", role, desc));
                }
            }
        }
        md.push('\n');
    }

    md.push_str("## Validation\n\n");
    md.push_str("Checks run in this order and stop at the first failure:\n\n");
    md.push_str("1. Every top-level key is present (`missing required field`)\n");
    md.push_str("2. `fontFamily` is non-empty; `cols`, `rows`, `fontSize` are positive\n");
    md.push_str("3. `lineHeight` and `letterSpacing` are non-negative\n");
    md.push_str("4. `[theme]` names exactly the roles above (`unknown theme role`)\n");
    md.push_str("5. Every color is `#` followed by six hex digits (`invalid color`)\n\n");

    md.push_str("## Example Configuration\n\n");
    md.push_str("```toml\n");
    md.push_str(super::presets::PRESETS[0].source);
    md.push_str("```\n");

    md
}
