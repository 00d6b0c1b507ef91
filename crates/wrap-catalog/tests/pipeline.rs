//! End-to-end pipeline tests: URL state -> load -> facets -> visible list.

use std::collections::HashSet;
use std::sync::Arc;

use wrap_cache::MemoryStore;
use wrap_catalog::{CatalogController, CatalogPhase};
use wrap_commerce::search::{CatalogQuery, SortKey};
use wrap_commerce::{Offer, Product};
use wrap_data::MemoryProductStore;

fn catalog_fixture() -> Vec<Product> {
    let mut fabric = Product::new("p1", "Fabric Bandages", "bandages", "MediWrap");
    fabric.rating = Some(4.6);
    fabric.offers = vec![Offer::new("Amazon", 6.49)];
    fabric.created_at = 500;

    let mut clear = Product::new("p2", "Clear Bandages", "bandages", "FlexBind");
    clear.offers = vec![Offer::new("Amazon", 4.99)];
    clear.created_at = 400;

    let mut gauze = Product::new("p3", "Gauze Roll", "dressings", "MediWrap");
    gauze.rating = Some(4.9);
    gauze.offers = vec![Offer::new("MedSupply", 7.25)];
    gauze.created_at = 300;

    let mut tape = Product::new("p4", "Cloth Tape", "tape", "FlexBind");
    tape.rating = Some(3.1);
    tape.offers = vec![Offer::new("Amazon", 3.99)];
    tape.created_at = 200;

    let mut kit = Product::new("p5", "Compact Kit", "kits", "Rescuely");
    kit.created_at = 100;

    vec![fabric, clear, gauze, tape, kit]
}

#[tokio::test]
async fn url_state_drives_the_visible_list() {
    let store = Arc::new(MemoryProductStore::new(catalog_fixture()));
    let query = CatalogQuery::from_query_string("cat=bandages&sort=price_asc");
    let mut catalog =
        CatalogController::new(store, Arc::new(MemoryStore::new())).with_query(query);

    catalog.load().await;
    assert_eq!(catalog.phase(), CatalogPhase::Loaded);

    let visible = catalog.visible(&HashSet::new());
    let ids: Vec<&str> = visible.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, ["p2", "p1"], "both bandages, cheapest first");
}

#[tokio::test]
async fn category_then_rating_then_brand_narrows_stepwise() {
    let store = Arc::new(MemoryProductStore::new(catalog_fixture()));
    let mut catalog = CatalogController::new(store, Arc::new(MemoryStore::new()));

    catalog.set_category(Some("bandages"));
    catalog.load().await;
    assert_eq!(catalog.visible(&HashSet::new()).len(), 2);

    catalog.facets_mut().set_min_rating(4);
    assert_eq!(
        catalog.visible(&HashSet::new()).len(),
        2,
        "the unrated bandage passes the rating filter"
    );

    catalog.facets_mut().toggle_brand("MediWrap");
    let visible = catalog.visible(&HashSet::new());
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].id.as_str(), "p1");
}

#[tokio::test]
async fn facet_changes_do_not_refetch() {
    let store = Arc::new(MemoryProductStore::new(catalog_fixture()));
    let mut catalog = CatalogController::new(store, Arc::new(MemoryStore::new()));

    catalog.load().await;
    let loaded = catalog.products().len();

    catalog.facets_mut().toggle_brand("MediWrap");
    catalog.facets_mut().set_min_rating(5);
    catalog.set_favorites_only(false);

    // The loaded list is untouched; only the derived view narrows.
    assert_eq!(catalog.products().len(), loaded);
    assert_eq!(catalog.phase(), CatalogPhase::Loaded);
}

#[tokio::test]
async fn remount_seeds_from_the_snapshot_written_by_the_previous_session() {
    let kv = Arc::new(MemoryStore::new());
    let store = Arc::new(MemoryProductStore::new(catalog_fixture()));

    {
        let mut catalog = CatalogController::new(store.clone(), kv.clone());
        catalog.load().await;
        assert_eq!(catalog.products().len(), 5);
    }

    // Simulated remount: a fresh controller paints from the cache before
    // any network round-trip.
    let catalog = CatalogController::new(store, kv);
    assert_eq!(catalog.phase(), CatalogPhase::Idle);
    assert_eq!(catalog.products().len(), 5);
}

#[tokio::test]
async fn search_refetch_then_sort_client_side() {
    let store = Arc::new(MemoryProductStore::new(catalog_fixture()));
    let mut catalog = CatalogController::new(store, Arc::new(MemoryStore::new()));

    catalog.set_search("mediwrap");
    catalog.set_sort(SortKey::NameAsc);
    catalog.load().await;

    let visible = catalog.visible(&HashSet::new());
    let names: Vec<&str> = visible.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["Fabric Bandages", "Gauze Roll"]);
}
