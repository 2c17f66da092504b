//! Incremental graft of new entities into an existing routes artifact.
//!
//! Four independent regions receive fragments: the handler record type, the
//! constructor signature, the constructor body, and each per-method
//! registration block. Any region whose anchor cannot be found is skipped,
//! recorded as a diagnostic, and left byte-identical to its input.

use scaffold_core::{EntityName, MethodKind};
use tracing::debug;

use crate::error::{Diagnostic, SlotKind};
use crate::fragments;
use crate::routes_scan::RoutesAnalysis;
use crate::splice;

#[derive(Debug)]
pub struct RoutesGraft {
    pub content: String,
    pub added: Vec<EntityName>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Splice declarations, route groups, struct fields, and constructor pieces
/// for every requested entity not already registered. All slots come from
/// the single up-front analysis and are applied in one descending pass.
pub fn graft_routes(analysis: &RoutesAnalysis, module: &str, requested: &[EntityName]) -> RoutesGraft {
    let added = crate::pipeline::filter_new_tables(requested, &analysis.existing_entities);

    if added.is_empty() {
        return RoutesGraft {
            content: analysis.artifact.content.clone(),
            added,
            diagnostics: Vec::new(),
        };
    }
    debug!(
        "grafting {} entities into {}",
        added.len(),
        analysis.artifact.path.display()
    );

    let lines: Vec<&str> = analysis.artifact.content.split('\n').collect();
    let mut insertions = Vec::new();
    let mut diagnostics = Vec::new();
    let missing = |slot: SlotKind, method: Option<MethodKind>| {
        Diagnostic::MissingMarker {
            path: analysis.artifact.path.clone(),
            slot,
            method,
        }
    };

    for &kind in MethodKind::all() {
        let Some(block) = analysis.method_blocks.get(&kind) else {
            diagnostics.push(missing(SlotKind::MethodBlock, Some(kind)));
            continue;
        };
        let body = &lines[block.start_line..=block.end_line];

        // The grouping call anchors the declarations; without it neither
        // the declarations nor the route groups have a defined position.
        let Some(decl_off) = body
            .iter()
            .position(|l| l.contains("v1 :=") && l.contains("Group("))
        else {
            diagnostics.push(missing(SlotKind::Declarations, Some(kind)));
            continue;
        };
        insertions.push((
            block.start_line + decl_off,
            fragments::handler_declarations(module, kind, &added),
        ));

        // Closing delimiter of the group region: the last one-tab `}`.
        match body.iter().rposition(|l| l.starts_with("\t}") && l.trim() == "}") {
            Some(off) => insertions.push((
                block.start_line + off,
                fragments::route_groups(kind, &added),
            )),
            None => diagnostics.push(missing(SlotKind::RouteGroup, Some(kind))),
        }
    }

    match anchor_after(&lines, |l| l.contains("type") && l.contains("HTTPHandler struct {")) {
        Some(line) => insertions.push((line, fragments::struct_fields(module, &added))),
        None => diagnostics.push(missing(SlotKind::RecordFields, None)),
    }
    match anchor_after(&lines, |l| l.contains("func New") && l.contains("HTTPHandler(")) {
        Some(line) => insertions.push((line, fragments::constructor_params(module, &added))),
        None => diagnostics.push(missing(SlotKind::ConstructorParams, None)),
    }
    match anchor_after_with(&lines, |l| l.contains("return &") && l.contains("HTTPHandler{"), |l| {
        l.contains("cloudStorage:") || l.contains("cache:")
    }) {
        Some(line) => insertions.push((line, fragments::constructor_assignments(&added))),
        None => diagnostics.push(missing(SlotKind::ConstructorBody, None)),
    }

    RoutesGraft {
        content: splice::apply_insertions(&analysis.artifact.content, insertions),
        added,
        diagnostics,
    }
}

/// First trailing-dependency anchor (`cloudStorage` or `cache`) after the
/// line matching `open`.
fn anchor_after(lines: &[&str], open: impl Fn(&str) -> bool) -> Option<usize> {
    anchor_after_with(lines, open, |l| {
        l.contains("cloudStorage") || l.contains("cache")
    })
}

fn anchor_after_with(
    lines: &[&str],
    open: impl Fn(&str) -> bool,
    anchor: impl Fn(&str) -> bool,
) -> Option<usize> {
    let start = lines.iter().position(|l| open(l))?;
    lines
        .iter()
        .enumerate()
        .skip(start + 1)
        .find_map(|(i, l)| anchor(l).then_some(i))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifact::SourceArtifact;
    use crate::routes_scan::analyze_routes_content;
    use scaffold_core::PluralRules;
    use std::path::PathBuf;

    const ROUTES: &str = "\
// Code generated by scaffold. HTTP route registration for shop.
package app

type ShopHTTPHandler struct {
\tapp *gin.Engine
\tproductCreator shopservicev1.ProductCreatorUseCase
\tproductFinder shopservicev1.ProductFinderUseCase
\tproductUpdater shopservicev1.ProductUpdaterUseCase
\tproductDeleter shopservicev1.ProductDeleterUseCase
\tcloudStorage storage.Storage
}

func NewShopHTTPHandler(
\tapp *gin.Engine,
\tproductCreator shopservicev1.ProductCreatorUseCase,
\tproductFinder shopservicev1.ProductFinderUseCase,
\tproductUpdater shopservicev1.ProductUpdaterUseCase,
\tproductDeleter shopservicev1.ProductDeleterUseCase,
\tcloudStorage storage.Storage,
) *ShopHTTPHandler {
\treturn &ShopHTTPHandler{
\t\tapp: app,
\t\tproductCreator: productCreator,
\t\tproductFinder: productFinder,
\t\tproductUpdater: productUpdater,
\t\tproductDeleter: productDeleter,
\t\tcloudStorage: cloudStorage,
\t}
}

func (h *ShopHTTPHandler) ShopFinderHTTPHandler() {
\tproductHnd := shophandlerv1.NewProductFinderHandler(h.productFinder)
\tv1 := h.app.Group(\"/shop/v1\")
\t{
\t\tproducts := v1.Group(\"/products\", middleware.RequirePermission(
\t\t\tconstant.PermProductView,
\t\t\tconstant.PermSystemManage,
\t\t))
\t\t{
\t\t\tproducts.GET(\"\", productHnd.GetAllProducts)
\t\t\tproducts.GET(\"/:id\", productHnd.GetProductByID)
\t\t}
\t}
}

func (h *ShopHTTPHandler) ShopCreatorHTTPHandler() {
\tproductHnd := shophandlerv1.NewProductCreatorHandler(h.productCreator, h.cloudStorage)
\tv1 := h.app.Group(\"/shop/v1\")
\t{
\t\tproducts := v1.Group(\"/products\", middleware.RequirePermission(
\t\t\tconstant.PermProductCreate,
\t\t\tconstant.PermSystemManage,
\t\t))
\t\t{
\t\t\tproducts.POST(\"\", productHnd.CreateProduct)
\t\t}
\t}
}

func (h *ShopHTTPHandler) ShopUpdaterHTTPHandler() {
\tproductHnd := shophandlerv1.NewProductUpdaterHandler(h.productUpdater, h.cloudStorage)
\tv1 := h.app.Group(\"/shop/v1\")
\t{
\t\tproducts := v1.Group(\"/products\", middleware.RequirePermission(
\t\t\tconstant.PermProductUpdate,
\t\t\tconstant.PermSystemManage,
\t\t))
\t\t{
\t\t\tproducts.PUT(\"/:id\", productHnd.UpdateProduct)
\t\t}
\t}
}

func (h *ShopHTTPHandler) ShopDeleterHTTPHandler() {
\tproductHnd := shophandlerv1.NewProductDeleterHandler(h.productDeleter)
\tv1 := h.app.Group(\"/shop/v1\")
\t{
\t\tproducts := v1.Group(\"/products\", middleware.RequirePermission(
\t\t\tconstant.PermProductDelete,
\t\t\tconstant.PermSystemManage,
\t\t))
\t\t{
\t\t\tproducts.DELETE(\"/:id\", productHnd.DeleteProductByID)
\t\t}
\t}
}
";

    fn analyze(content: &str) -> RoutesAnalysis {
        analyze_routes_content(SourceArtifact {
            path: PathBuf::from("app/shop_routes.go"),
            content: content.to_string(),
        })
    }

    fn entity(raw: &str) -> EntityName {
        EntityName::new(raw, &PluralRules::default())
    }

    #[test]
    fn grafts_all_regions_for_new_entity() {
        let analysis = analyze(ROUTES);
        let graft = graft_routes(&analysis, "shop", &[entity("category")]);

        assert_eq!(graft.added.len(), 1);
        assert!(graft.diagnostics.is_empty());
        // Struct field, constructor param, assignment.
        assert!(graft.content.contains("\tcategoryCreator shopservicev1.CategoryCreatorUseCase\n"));
        assert!(graft.content.contains("\tcategoryCreator shopservicev1.CategoryCreatorUseCase,\n"));
        assert!(graft.content.contains("\t\tcategoryFinder: categoryFinder,\n"));
        // Declarations in each block.
        assert!(graft.content.contains("categoryHnd := shophandlerv1.NewCategoryFinderHandler(h.categoryFinder)"));
        assert!(graft.content.contains("NewCategoryCreatorHandler(h.categoryCreator, h.cloudStorage)"));
        // Route groups with plural segments.
        assert!(graft.content.contains("categories := v1.Group(\"/categories\""));
        assert!(graft.content.contains("categories.GET(\"\", categoryHnd.GetAllCategories)"));
        assert!(graft.content.contains("categories.DELETE(\"/:id\", categoryHnd.DeleteCategoryByID)"));
    }

    #[test]
    fn declarations_precede_grouping_call() {
        let analysis = analyze(ROUTES);
        let graft = graft_routes(&analysis, "shop", &[entity("category")]);

        let decl = graft
            .content
            .find("categoryHnd := shophandlerv1.NewCategoryFinderHandler")
            .unwrap();
        let group_call = graft.content.find("v1 := h.app.Group(\"/shop/v1\")").unwrap();
        assert!(decl < group_call);
    }

    #[test]
    fn new_group_lands_inside_existing_brace_region() {
        let analysis = analyze(ROUTES);
        let graft = graft_routes(&analysis, "shop", &[entity("category")]);

        // In the finder block, the category group comes after product's and
        // before the one-tab closing brace.
        let finder_block_end = graft.content.find("ShopCreatorHTTPHandler").unwrap();
        let finder = &graft.content[..finder_block_end];
        let product_group = finder.find("products := v1.Group").unwrap();
        let category_group = finder.find("categories := v1.Group").unwrap();
        assert!(category_group > product_group);
    }

    #[test]
    fn registered_entity_is_left_alone() {
        let analysis = analyze(ROUTES);
        let graft = graft_routes(&analysis, "shop", &[entity("product")]);
        assert!(graft.added.is_empty());
        assert_eq!(graft.content, ROUTES);
    }

    #[test]
    fn missing_block_is_reported_and_others_still_grafted() {
        let truncated = &ROUTES[..ROUTES.find("func (h *ShopHTTPHandler) ShopDeleterHTTPHandler").unwrap()];
        let analysis = analyze(truncated);
        let graft = graft_routes(&analysis, "shop", &[entity("category")]);

        assert!(graft.diagnostics.iter().any(|d| matches!(
            d,
            Diagnostic::MissingMarker {
                slot: SlotKind::MethodBlock,
                method: Some(MethodKind::Deleter),
                ..
            }
        )));
        assert!(graft.content.contains("categories.GET(\"\", categoryHnd.GetAllCategories)"));
        assert!(!graft.content.contains("DeleteCategoryByID"));
    }

    #[test]
    fn missing_group_call_skips_whole_block() {
        let no_group = ROUTES.replacen("\tv1 := h.app.Group(\"/shop/v1\")\n", "", 1);
        let analysis = analyze(&no_group);
        let graft = graft_routes(&analysis, "shop", &[entity("category")]);

        assert!(graft.diagnostics.iter().any(|d| matches!(
            d,
            Diagnostic::MissingMarker {
                slot: SlotKind::Declarations,
                method: Some(MethodKind::Finder),
                ..
            }
        )));
        // The finder block received neither declarations nor groups; the
        // other blocks did.
        assert!(!graft.content.contains("NewCategoryFinderHandler"));
        assert!(graft.content.contains("NewCategoryCreatorHandler"));
    }
}
