//! Menu context
//!
//! [`Menu`] owns the catalog, configuration, search matcher and optional
//! allergen data, and is the single entry point for order operations. It holds no per-customer state
//! and can be shared behind an `Arc` by any number of sessions.

use crate::cart::Cart;
use crate::cascade::DefaultCascader;
use crate::config::ExplorerConfig;
use crate::mutator::{Mutation, OrderMutator};
use crate::order::Order;
use crate::pricing;
use crate::render::{OrderRenderer, UNKNOWN_TITLE};
use crate::search::{Candidate, Matcher, TokenMatcher};
use menu_catalog::{AllergenFlags, AllergenTable, Catalog, Node, NodeId, Reference};
use std::collections::HashSet;
use std::fmt;

/// Catalog-bound order engine
pub struct Menu {
    catalog: Catalog,
    config: ExplorerConfig,
    matcher: Box<dyn Matcher>,
    allergens: Option<AllergenTable>,
}

/// Shown by allergen views when no allergen document was loaded
pub const NO_ALLERGEN_DATA: &str = "No allergen data loaded";

impl fmt::Debug for Menu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Menu")
            .field("catalog", &self.catalog)
            .field("config", &self.config)
            .field("allergens", &self.allergens.is_some())
            .finish_non_exhaustive()
    }
}

impl Menu {
    /// Create with default configuration and [`TokenMatcher`]
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self::with_config(catalog, ExplorerConfig::default())
    }

    /// Create with explicit configuration
    #[must_use]
    pub fn with_config(catalog: Catalog, config: ExplorerConfig) -> Self {
        Self {
            catalog,
            config,
            matcher: Box::new(TokenMatcher),
            allergens: None,
        }
    }

    /// Replace the search matcher
    #[must_use]
    pub fn with_matcher(mut self, matcher: impl Matcher + 'static) -> Self {
        self.matcher = Box::new(matcher);
        self
    }

    /// Attach allergen and ingredient data
    #[must_use]
    pub fn with_allergens(mut self, table: AllergenTable) -> Self {
        self.allergens = Some(table);
        self
    }

    /// Underlying catalog
    #[inline]
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Active configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &ExplorerConfig {
        &self.config
    }

    fn mutator(&self) -> OrderMutator<'_> {
        OrderMutator::new(&self.catalog, &self.config)
    }

    fn renderer(&self) -> OrderRenderer<'_> {
        OrderRenderer::new(&self.catalog, &self.config)
    }

    /// New order rooted at `root` with defaults applied; `None` when `root` is not a product
    #[must_use]
    pub fn start_order(&self, root: NodeId) -> Option<Order> {
        let product = self.catalog.product(root)?;
        let mut order = Order::new(root);
        DefaultCascader::new(&self.catalog).apply(product, &mut order);
        Some(order)
    }

    /// See [`OrderMutator::add`]
    pub fn add_to_order(&self, id: NodeId, order: &mut Order) -> Mutation {
        self.mutator().add(id, order)
    }

    /// See [`OrderMutator::remove`]
    pub fn remove_from_order(&self, id: NodeId, order: &mut Order) -> Mutation {
        self.mutator().remove(id, order)
    }

    /// See [`OrderMutator::add_multiple`]
    pub fn add_multiple_to_order(&self, ids: &[NodeId], order: &mut Order) -> Vec<Mutation> {
        self.mutator().add_multiple(ids, order)
    }

    /// See [`OrderMutator::remove_multiple`]
    pub fn remove_multiple_from_order(&self, ids: &[NodeId], order: &mut Order) -> Vec<Mutation> {
        self.mutator().remove_multiple(ids, order)
    }

    /// Total price of one order
    #[must_use]
    pub fn order_price(&self, order: &Order) -> i64 {
        pricing::order_price(&self.catalog, order.ids())
    }

    /// Total price of every order in a cart
    #[must_use]
    pub fn cart_total_price(&self, cart: &Cart) -> i64 {
        pricing::cart_total_price(&self.catalog, cart)
    }

    /// Every ID in product `root`, including `root`
    #[must_use]
    pub fn all_sub_ids(&self, root: NodeId) -> HashSet<NodeId> {
        self.catalog.all_sub_ids(root)
    }

    /// Every ID beneath `cutoff` inside product `base`, including `cutoff`
    #[must_use]
    pub fn sub_ids_under(&self, base: NodeId, cutoff: NodeId) -> HashSet<NodeId> {
        self.catalog.sub_ids_under(base, cutoff)
    }

    /// Product by ID
    #[must_use]
    pub fn product_by_id(&self, id: NodeId) -> Option<&Node> {
        self.catalog.product(id)
    }

    /// Reference by ID
    #[must_use]
    pub fn ref_by_id(&self, id: NodeId) -> Option<&Reference> {
        self.catalog.reference(id)
    }

    /// Title, or `"Unknown"`
    #[must_use]
    pub fn title_for_id(&self, id: NodeId) -> &str {
        self.catalog.title(id).unwrap_or(UNKNOWN_TITLE)
    }

    /// Description, `"No Description"` when unset, `"Invalid Item"` when the ID is unknown
    #[must_use]
    pub fn description_for_id(&self, id: NodeId) -> &str {
        match self.catalog.reference(id) {
            Some(r) => r.description.as_deref().unwrap_or("No Description"),
            None => "Invalid Item",
        }
    }

    /// Title of the order's product
    #[must_use]
    pub fn order_title(&self, order: &Order) -> Option<&str> {
        self.catalog.title(order.root()?)
    }

    /// Selected nodes of an order, with its price
    #[must_use]
    pub fn print_order(&self, order: &Order) -> String {
        self.renderer().render_order(order.ids())
    }

    /// Every option of an order's product, selected ones marked
    #[must_use]
    pub fn print_order_options(&self, order: &Order) -> String {
        self.renderer().render_options(order.ids())
    }

    /// Every order in a cart, with the cart total
    #[must_use]
    pub fn print_cart(&self, cart: &Cart) -> String {
        self.renderer().render_cart(cart)
    }

    /// Best-matching title inside the order's product
    #[must_use]
    pub fn search_order(&self, query: &str, order: &Order) -> Option<String> {
        let root = order.root()?;
        let mut ids: Vec<NodeId> = self.catalog.all_sub_ids(root).into_iter().collect();
        ids.sort_unstable();

        let candidates: Vec<Candidate> = ids
            .into_iter()
            .filter_map(|id| self.catalog.title(id).map(|t| Candidate::new(id, t)))
            .collect();
        self.matcher.best_match(query, &candidates).map(|c| c.title)
    }

    /// Up to `search_limit` matches across all titles, one `"<title> - <id>"` per line
    #[must_use]
    pub fn search_top(&self, query: &str) -> String {
        let candidates: Vec<Candidate> = self
            .catalog
            .titles()
            .map(|(id, title)| Candidate::new(id, title))
            .collect();

        self.matcher
            .rank(query, &candidates)
            .into_iter()
            .take(self.config.search_limit)
            .filter_map(|s| s.candidate.id.map(|id| format!("{} - {}", s.candidate.title, id)))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Loaded allergen data
    #[inline]
    #[must_use]
    pub fn allergen_table(&self) -> Option<&AllergenTable> {
        self.allergens.as_ref()
    }

    /// Allergens of a product or sub-item by name
    #[must_use]
    pub fn allergens_for(&self, name: &str) -> Option<&AllergenFlags> {
        self.allergens.as_ref()?.allergens(name)
    }

    /// Ingredient list of a sub-item by name
    #[must_use]
    pub fn ingredients_for(&self, name: &str) -> Option<&str> {
        self.allergens.as_ref()?.ingredients(name)
    }

    /// Allergen report for an exact product or sub-item name
    #[must_use]
    pub fn print_allergens(&self, name: &str) -> String {
        match &self.allergens {
            Some(table) => table.describe(name),
            None => NO_ALLERGEN_DATA.to_string(),
        }
    }

    /// Allergen summary of every product
    #[must_use]
    pub fn print_all_allergens(&self) -> String {
        match &self.allergens {
            Some(table) => table.describe_all(),
            None => NO_ALLERGEN_DATA.to_string(),
        }
    }

    /// Allergen report for the best-matching product or sub-item name
    #[must_use]
    pub fn search_allergens(&self, query: &str) -> Option<String> {
        let table = self.allergens.as_ref()?;
        let candidates: Vec<Candidate> = table.names().map(Candidate::named).collect();
        let best = self.matcher.best_match(query, &candidates)?;
        Some(table.describe(&best.title))
    }

    /// `"<sub-item>: <ingredients>"` for the best-matching sub-item that lists ingredients
    #[must_use]
    pub fn search_ingredients(&self, query: &str) -> Option<String> {
        let table = self.allergens.as_ref()?;
        let candidates: Vec<Candidate> = table.ingredient_names().map(Candidate::named).collect();
        let best = self.matcher.best_match(query, &candidates)?;
        let ingredients = table.ingredients(&best.title)?;
        Some(format!("{}: {}", best.title, ingredients))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::ScoredCandidate;
    use serde_json::json;

    fn menu() -> Menu {
        let catalog = Catalog::from_value(json!({
            "Refs": {
                "1": { "Title": "Chicken Wrap", "Description": "Grilled" },
                "2": { "Title": "Chicken Nuggets" },
                "3": { "Title": "Spicy Sauce" },
                "4": {}
            },
            "Products": [
                { "Id": 1, "Items": [ { "Id": 3 } ] },
                { "Id": 2 }
            ]
        }))
        .unwrap();
        Menu::new(catalog)
    }

    #[test]
    fn text_lookups_fall_back() {
        let m = menu();
        assert_eq!(m.title_for_id(NodeId(1)), "Chicken Wrap");
        assert_eq!(m.title_for_id(NodeId(4)), UNKNOWN_TITLE);
        assert_eq!(m.description_for_id(NodeId(1)), "Grilled");
        assert_eq!(m.description_for_id(NodeId(2)), "No Description");
        assert_eq!(m.description_for_id(NodeId(99)), "Invalid Item");
    }

    #[test]
    fn start_order_requires_product() {
        let m = menu();
        assert!(m.start_order(NodeId(3)).is_none());
        let order = m.start_order(NodeId(1)).unwrap();
        assert_eq!(m.order_title(&order), Some("Chicken Wrap"));
        assert_eq!(m.order_title(&Order::empty()), None);
    }

    #[test]
    fn search_order_is_scoped_to_product() {
        let m = menu();
        let order = m.start_order(NodeId(1)).unwrap();
        assert_eq!(m.search_order("sauce", &order).as_deref(), Some("Spicy Sauce"));
        assert_eq!(m.search_order("nuggets", &order), None);
    }

    #[test]
    fn search_top_respects_limit() {
        let m = menu();
        assert_eq!(m.search_top("chicken"), "Chicken Wrap - 1\nChicken Nuggets - 2");

        let limited = Menu::with_config(
            m.catalog().clone(),
            ExplorerConfig::default().with_search_limit(1),
        );
        assert_eq!(limited.search_top("chicken"), "Chicken Wrap - 1");
    }

    fn allergen_menu() -> Menu {
        let table = AllergenTable::from_value(json!({
            "sub_items": {
                "Tortilla wrap": { "allergens": { "gluten": true }, "ingredients": "wheat flour, salt" },
                "Spicy sauce": { "allergens": { "mustard": true } }
            },
            "products": [ { "name": "Chicken Wrap", "allergens": { "gluten": true, "mustard": false } } ]
        }))
        .unwrap();
        menu().with_allergens(table)
    }

    #[test]
    fn allergen_views_need_data() {
        let m = menu();
        assert!(m.allergen_table().is_none());
        assert_eq!(m.allergens_for("Chicken Wrap"), None);
        assert_eq!(m.print_allergens("Chicken Wrap"), NO_ALLERGEN_DATA);
        assert_eq!(m.print_all_allergens(), NO_ALLERGEN_DATA);
        assert_eq!(m.search_allergens("wrap"), None);
    }

    #[test]
    fn allergen_lookups_by_name() {
        let m = allergen_menu();
        assert_eq!(m.allergens_for("chicken wrap").map(|f| f["gluten"]), Some(true));
        assert_eq!(m.ingredients_for("Tortilla wrap"), Some("wheat flour, salt"));
        assert_eq!(
            m.print_allergens("Spicy sauce"),
            "Sub-item: Spicy sauce\nAllergens:\n  mustard: true"
        );
    }

    #[test]
    fn allergen_search_uses_matcher() {
        let m = allergen_menu();
        assert_eq!(
            m.search_allergens("sauce").as_deref(),
            Some("Sub-item: Spicy sauce\nAllergens:\n  mustard: true")
        );
        assert_eq!(
            m.search_ingredients("tortilla").as_deref(),
            Some("Tortilla wrap: wheat flour, salt")
        );
        // sauce lists no ingredients
        assert_eq!(m.search_ingredients("sauce"), None);
        assert_eq!(m.search_allergens("zebra"), None);
    }

    struct Reverse;

    impl Matcher for Reverse {
        fn rank(&self, _query: &str, candidates: &[Candidate]) -> Vec<ScoredCandidate> {
            candidates
                .iter()
                .rev()
                .map(|c| ScoredCandidate {
                    candidate: c.clone(),
                    score: 1.0,
                })
                .collect()
        }
    }

    #[test]
    fn custom_matcher_is_used() {
        let m = menu().with_matcher(Reverse);
        assert_eq!(m.search_top("anything").lines().next(), Some("Spicy Sauce - 3"));
    }
}
