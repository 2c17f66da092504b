//! Best-effort updates to shared constant files.
//!
//! Unlike the wiring and routes artifacts these files are owned by the whole
//! project, so failures here never abort a graft run. The pipeline downgrades
//! errors from this module to [`Diagnostic::SideArtifact`] entries.
//!
//! [`Diagnostic::SideArtifact`]: crate::error::Diagnostic::SideArtifact

use scaffold_core::{Config, EntityName, MethodKind};
use tracing::debug;

use crate::artifact::{write_artifact, SourceArtifact, WriteResult};
use crate::error::GraftError;
use crate::splice;

/// Permission suffixes emitted per entity, beyond the four route actions.
const EXTRA_PERMISSIONS: &[(&str, &str)] = &[("List", "list"), ("Manage", "manage")];

/// Append a permission-constant section for each entity to the permissions
/// file. An entity whose `Perm<Display>View` constant already exists is
/// skipped wholesale.
pub fn update_permissions(
    config: &Config,
    module_display: &str,
    entities: &[EntityName],
    dry_run: bool,
) -> Result<WriteResult, GraftError> {
    let artifact = SourceArtifact::load(&config.permissions_path)?;

    let new: Vec<&EntityName> = entities
        .iter()
        .filter(|e| !artifact.content.contains(&format!("Perm{}View", e.display())))
        .collect();
    if new.is_empty() {
        return Ok(WriteResult::Unchanged {
            path: artifact.path,
        });
    }
    debug!("adding permissions for {} entities", new.len());

    let blocks: Vec<String> = new
        .iter()
        .map(|e| {
            let mut block = String::new();
            for kind in MethodKind::all() {
                let action = kind.permission_action();
                push_permission(&mut block, e, action, &action.to_lowercase());
            }
            for (suffix, verb) in EXTRA_PERMISSIONS {
                push_permission(&mut block, e, suffix, verb);
            }
            block
        })
        .collect();
    let section = format!(
        "// {module_display} permissions\nconst (\n{})\n",
        blocks.join("\n")
    );

    let lines: Vec<&str> = artifact.content.split('\n').collect();
    // Keep the system section last; otherwise append after the final const
    // group, or at end of file.
    let slot = lines
        .iter()
        .position(|l| l.trim() == "// System permissions")
        .or_else(|| lines.iter().rposition(|l| l.trim() == ")").map(|i| i + 1))
        .unwrap_or(lines.len());

    let content = splice::insert_before_line(&artifact.content, slot, &section);
    write_artifact(&artifact.path, &content, dry_run)
}

fn push_permission(section: &mut String, e: &EntityName, suffix: &str, verb: &str) {
    let (d, n) = (e.display(), e.name());
    section.push_str(&format!(
        "\t// Perm{d}{suffix} allows {verb} on {n} records.\n\
         \tPerm{d}{suffix} = \"{n}:{verb}\"\n"
    ));
}

/// Append `FindByID`/`FindByName` cache-key constants for each entity to the
/// cache-keys file. Keys are namespaced by the module's storage schema.
pub fn update_cache_keys(
    config: &Config,
    schema: &str,
    entities: &[EntityName],
    dry_run: bool,
) -> Result<WriteResult, GraftError> {
    let artifact = SourceArtifact::load(&config.cache_keys_path)?;

    let new: Vec<&EntityName> = entities
        .iter()
        .filter(|e| !artifact.content.contains(&format!("{}FindByID", e.display())))
        .collect();
    if new.is_empty() {
        return Ok(WriteResult::Unchanged {
            path: artifact.path,
        });
    }
    debug!("adding cache keys for {} entities", new.len());

    let mut block = String::new();
    for e in &new {
        let (d, n) = (e.display(), e.name());
        block.push_str(&format!(
            "\n\t// {d}FindByID is a redis key for find {n} by id.\n\
             \t{d}FindByID = prefix + \":{schema}:{n}:find-by-id:%v\"\n\
             \t// {d}FindByName is a redis key for find {n} by name.\n\
             \t{d}FindByName = prefix + \":{schema}:{n}:find-by-name:%v\""
        ));
    }

    let lines: Vec<&str> = artifact.content.split('\n').collect();
    // Inside the trailing const group, just before its closing paren.
    let slot = lines.iter().rposition(|l| l.trim() == ")");
    let content = match slot {
        Some(i) => splice::insert_before_line(&artifact.content, i, block.trim_start_matches('\n')),
        None => {
            let mut content = artifact.content.clone();
            content.push_str(block.trim_start_matches('\n'));
            content.push('\n');
            content
        }
    };
    write_artifact(&artifact.path, &content, dry_run)
}
