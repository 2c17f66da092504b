//! Fragment synthesis for incremental grafts.
//!
//! Every function here is pure text assembly. The emitted lines are
//! byte-identical to what the whole-file templates produce for the same
//! entity, which keeps grafted files indistinguishable from freshly
//! scaffolded ones and keeps the anchor scanners stable across repeated
//! runs.
//!
//! Fragments never carry a trailing newline; the splice engine joins them
//! into the surrounding file.

use scaffold_core::{EntityName, MethodKind};

/// Repository and service construction block for the wiring artifact, one
/// paragraph pair per entity. Led by a blank line so it separates cleanly
/// from the preceding entity's service block.
pub fn wiring_fragment(entities: &[EntityName]) -> String {
    let mut out = String::new();
    for e in entities {
        let (v, d) = (e.var(), e.display());
        out.push_str(&format!(
            "\n\t// {d} Repository\n\
             \t{v}FinderRepo := repository.New{d}FinderRepository(db, cache)\n\
             \t{v}CreatorRepo := repository.New{d}CreatorRepository(db, cache)\n\
             \t{v}UpdaterRepo := repository.New{d}UpdaterRepository(db, cache)\n\
             \t{v}DeleterRepo := repository.New{d}DeleterRepository(db, cache)\n\
             \n\
             \t// {d} Service\n\
             \t{v}CreatorSvc := service.New{d}Creator(cfg, {v}CreatorRepo, {v}FinderRepo, {v}UpdaterRepo, cloudStorage)\n\
             \t{v}FinderSvc := service.New{d}Finder(cfg, {v}FinderRepo, cloudStorage)\n\
             \t{v}UpdaterSvc := service.New{d}Updater(cfg, {v}FinderRepo, {v}UpdaterRepo, cloudStorage)\n\
             \t{v}DeleterSvc := service.New{d}Deleter(cfg, {v}DeleterRepo, cloudStorage)"
        ));
    }
    out
}

/// Use-case arguments passed into the handler constructor call.
pub fn handler_call_args(entities: &[EntityName]) -> String {
    entities
        .iter()
        .map(|e| {
            let (v, d) = (e.var(), e.display());
            format!("\t\t// {d}\n\t\t{v}CreatorSvc, {v}FinderSvc, {v}UpdaterSvc, {v}DeleterSvc,")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Handler construction argument list, matching the routes template per kind.
fn handler_args(kind: MethodKind, var: &str) -> String {
    match kind {
        MethodKind::Finder => format!("h.{var}Finder"),
        MethodKind::Creator => format!("h.{var}Creator, h.cloudStorage"),
        MethodKind::Updater => format!("h.{var}Updater, h.cloudStorage"),
        MethodKind::Deleter => format!("h.{var}Deleter"),
    }
}

/// `…Hnd := …handlerv1.New…Handler(…)` declarations for one method block.
pub fn handler_declarations(module: &str, kind: MethodKind, entities: &[EntityName]) -> String {
    entities
        .iter()
        .map(|e| {
            format!(
                "\t{v}Hnd := {module}handlerv1.New{d}{tag}Handler({args})",
                v = e.var(),
                d = e.display(),
                tag = kind.tag(),
                args = handler_args(kind, e.var()),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Route registrations for one method kind, against the entity's group var.
fn route_lines(kind: MethodKind, e: &EntityName) -> String {
    let (v, d, pp, mp) = (e.var(), e.display(), e.path_plural(), e.method_plural());
    match kind {
        MethodKind::Finder => format!(
            "\t\t\t{pp}.GET(\"\", {v}Hnd.GetAll{mp})\n\
             \t\t\t{pp}.GET(\"/:id\", {v}Hnd.Get{d}ByID)"
        ),
        MethodKind::Creator => format!("\t\t\t{pp}.POST(\"\", {v}Hnd.Create{d})"),
        MethodKind::Updater => format!("\t\t\t{pp}.PUT(\"/:id\", {v}Hnd.Update{d})"),
        MethodKind::Deleter => format!("\t\t\t{pp}.DELETE(\"/:id\", {v}Hnd.Delete{d}ByID)"),
    }
}

/// Permission-guarded route groups for one method block, one group per
/// entity, named after the entity's URL path segment.
pub fn route_groups(kind: MethodKind, entities: &[EntityName]) -> String {
    entities
        .iter()
        .map(|e| {
            let (d, pp) = (e.display(), e.path_plural());
            format!(
                "\t\t{pp} := v1.Group(\"/{pp}\", middleware.RequirePermission(\n\
                 \t\t\tconstant.Perm{d}{action},\n\
                 \t\t\tconstant.PermSystemManage,\n\
                 \t\t))\n\
                 \t\t{{\n\
                 {routes}\n\
                 \t\t}}",
                action = kind.permission_action(),
                routes = route_lines(kind, e),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Use-case fields for the handler struct, Creator through Deleter.
pub fn struct_fields(module: &str, entities: &[EntityName]) -> String {
    entities
        .iter()
        .map(|e| {
            let (v, d) = (e.var(), e.display());
            format!(
                "\t{v}Creator {module}servicev1.{d}CreatorUseCase\n\
                 \t{v}Finder {module}servicev1.{d}FinderUseCase\n\
                 \t{v}Updater {module}servicev1.{d}UpdaterUseCase\n\
                 \t{v}Deleter {module}servicev1.{d}DeleterUseCase"
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Use-case parameters for the handler constructor signature.
pub fn constructor_params(module: &str, entities: &[EntityName]) -> String {
    entities
        .iter()
        .map(|e| {
            let (v, d) = (e.var(), e.display());
            format!(
                "\t{v}Creator {module}servicev1.{d}CreatorUseCase,\n\
                 \t{v}Finder {module}servicev1.{d}FinderUseCase,\n\
                 \t{v}Updater {module}servicev1.{d}UpdaterUseCase,\n\
                 \t{v}Deleter {module}servicev1.{d}DeleterUseCase,"
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Field assignments inside the constructor's struct literal.
pub fn constructor_assignments(entities: &[EntityName]) -> String {
    entities
        .iter()
        .map(|e| {
            let v = e.var();
            format!(
                "\t\t{v}Creator: {v}Creator,\n\
                 \t\t{v}Finder: {v}Finder,\n\
                 \t\t{v}Updater: {v}Updater,\n\
                 \t\t{v}Deleter: {v}Deleter,"
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
