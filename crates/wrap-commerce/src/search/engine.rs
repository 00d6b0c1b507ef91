//! The filter/sort engine.
//!
//! A pure function from the loaded product list plus the current filter
//! state to the visible list. Recomputed on every state change; text search
//! is not applied here because it is a server-side-eligible filter handled
//! by the loader.

use crate::ids::ProductId;
use crate::product::Product;
use crate::search::filter::FacetFilter;
use crate::search::query::{CatalogQuery, SortKey};
use std::cmp::Ordering;
use std::collections::HashSet;

/// Compute the visible product list.
///
/// Applies, in order: the favorites restriction, the category restriction,
/// the facet predicates (price range, brand, minimum rating), and finally
/// the active sort. `Relevance` preserves the server-provided order; every
/// other key sorts stably with `id` ascending as the deterministic tiebreak.
pub fn visible_products<'a>(
    products: &'a [Product],
    query: &CatalogQuery,
    facets: &FacetFilter,
    favorites: &HashSet<ProductId>,
) -> Vec<&'a Product> {
    let mut visible: Vec<&Product> = products
        .iter()
        .filter(|p| !query.favorites_only || favorites.contains(&p.id))
        .filter(|p| match &query.category {
            Some(cat) => p.category == *cat,
            None => true,
        })
        .filter(|p| facets.matches(p))
        .collect();

    sort_products(&mut visible, query.sort);
    visible
}

fn sort_products(products: &mut [&Product], sort: SortKey) {
    match sort {
        SortKey::Relevance => {}
        SortKey::PriceAsc => products.sort_by(|a, b| {
            cmp_f64(a.best_price_or_zero(), b.best_price_or_zero()).then_with(|| a.id.cmp(&b.id))
        }),
        SortKey::PriceDesc => products.sort_by(|a, b| {
            cmp_f64(b.best_price_or_zero(), a.best_price_or_zero()).then_with(|| a.id.cmp(&b.id))
        }),
        SortKey::NameAsc => products.sort_by(|a, b| {
            a.name
                .to_lowercase()
                .cmp(&b.name.to_lowercase())
                .then_with(|| a.id.cmp(&b.id))
        }),
        SortKey::RatingDesc => products.sort_by(|a, b| {
            cmp_f64(b.rating.unwrap_or(0.0), a.rating.unwrap_or(0.0))
                .then_with(|| a.id.cmp(&b.id))
        }),
    }
}

fn cmp_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::Offer;
    use crate::search::filter::PriceRange;

    fn product(id: &str, name: &str, category: &str, brand: &str, price: Option<f64>) -> Product {
        let mut p = Product::new(id, name, category, brand);
        if let Some(price) = price {
            p.offers = vec![Offer::new("Amazon", price)];
        }
        p
    }

    fn no_favorites() -> HashSet<ProductId> {
        HashSet::new()
    }

    #[test]
    fn test_sort_name_asc() {
        let products = vec![
            product("p1", "B", "bandages", "A", Some(10.0)),
            product("p2", "A", "bandages", "A", Some(20.0)),
        ];
        let query = CatalogQuery {
            sort: SortKey::NameAsc,
            ..Default::default()
        };
        let visible = visible_products(&products, &query, &FacetFilter::new(), &no_favorites());
        let names: Vec<&str> = visible.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["A", "B"]);
    }

    #[test]
    fn test_sort_price_asc() {
        let products = vec![
            product("p1", "B", "bandages", "A", Some(10.0)),
            product("p2", "A", "bandages", "A", Some(20.0)),
        ];
        let query = CatalogQuery {
            sort: SortKey::PriceAsc,
            ..Default::default()
        };
        let visible = visible_products(&products, &query, &FacetFilter::new(), &no_favorites());
        let names: Vec<&str> = visible.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["B", "A"]);
    }

    #[test]
    fn test_sort_ties_break_on_id() {
        let products = vec![
            product("p2", "Same", "bandages", "A", Some(5.0)),
            product("p1", "Same", "bandages", "A", Some(5.0)),
        ];
        let query = CatalogQuery {
            sort: SortKey::PriceAsc,
            ..Default::default()
        };
        let visible = visible_products(&products, &query, &FacetFilter::new(), &no_favorites());
        let ids: Vec<&str> = visible.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["p1", "p2"]);
    }

    #[test]
    fn test_relevance_preserves_input_order() {
        let products = vec![
            product("p2", "Zinc Tape", "tape", "A", Some(9.0)),
            product("p1", "Alcohol Wipes", "antiseptics", "A", Some(4.0)),
        ];
        let query = CatalogQuery::new();
        let visible = visible_products(&products, &query, &FacetFilter::new(), &no_favorites());
        let ids: Vec<&str> = visible.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["p2", "p1"]);
    }

    #[test]
    fn test_rating_desc_treats_unrated_as_zero() {
        let mut rated = product("p1", "Rated", "bandages", "A", Some(5.0));
        rated.rating = Some(4.5);
        let unrated = product("p2", "Unrated", "bandages", "A", Some(5.0));
        let products = vec![unrated, rated];
        let query = CatalogQuery {
            sort: SortKey::RatingDesc,
            ..Default::default()
        };
        let visible = visible_products(&products, &query, &FacetFilter::new(), &no_favorites());
        assert_eq!(visible[0].id.as_str(), "p1");
    }

    #[test]
    fn test_favorites_only_restricts_to_set() {
        let products = vec![
            product("p1", "Gauze", "dressings", "A", Some(5.0)),
            product("p2", "Tape", "tape", "A", Some(5.0)),
        ];
        let query = CatalogQuery {
            favorites_only: true,
            ..Default::default()
        };
        let favorites: HashSet<ProductId> = [ProductId::new("p2")].into_iter().collect();
        let visible = visible_products(&products, &query, &FacetFilter::new(), &favorites);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id.as_str(), "p2");
    }

    #[test]
    fn test_offerless_product_survives_price_range() {
        let products = vec![product("p1", "Splint", "instruments", "A", None)];
        let query = CatalogQuery::new();
        let mut facets = FacetFilter::new();
        facets.price_range = PriceRange::new(50.0, 100.0);
        let visible = visible_products(&products, &query, &facets, &no_favorites());
        assert_eq!(visible.len(), 1);
    }

    // The full catalog walk: category, then rating with an unrated product
    // passing through, then a brand cut.
    #[test]
    fn test_filter_pipeline_end_to_end() {
        let mut bandage_a = product("p1", "Fabric Bandages", "bandages", "MediWrap", Some(6.0));
        bandage_a.rating = Some(4.6);
        let bandage_b = product("p2", "Clear Bandages", "bandages", "FlexBind", Some(5.0));
        let mut dressing = product("p3", "Gauze Roll", "dressings", "MediWrap", Some(7.0));
        dressing.rating = Some(4.9);
        let mut tape = product("p4", "Cloth Tape", "tape", "FlexBind", Some(4.0));
        tape.rating = Some(3.1);
        let kit = product("p5", "Compact Kit", "kits", "Rescuely", Some(25.0));

        let products = vec![bandage_a, bandage_b, dressing, tape, kit];

        let mut query = CatalogQuery::new();
        query.category = Some("bandages".to_string());
        let mut facets = FacetFilter::new();

        let visible = visible_products(&products, &query, &facets, &no_favorites());
        assert_eq!(visible.len(), 2);

        facets.set_min_rating(4);
        let visible = visible_products(&products, &query, &facets, &no_favorites());
        assert_eq!(visible.len(), 2, "unrated product passes the rating filter");

        facets.toggle_brand("MediWrap");
        let visible = visible_products(&products, &query, &facets, &no_favorites());
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id.as_str(), "p1");
    }
}
