//! Endpoint behaviour exercised directly on `Cookbook`, without HTTP.

use cookbook::{
    BasicAuth, CookbookError, RecipeFields, RecipeFilter, RecipeRepository, StoreError,
};

use crate::support::{empty_cookbook, fingerling_potatoes, seeded_cookbook};

fn uris(recipes: &cookbook::RecipeCollection) -> Vec<&str> {
    recipes.recipes.iter().map(|r| r.uri.as_str()).collect()
}

#[test]
fn italian_recipes() {
    let cookbook = seeded_cookbook();
    let italian = cookbook.italian_recipes().unwrap();

    assert_eq!(uris(&italian), vec!["/cookbook/v1.0/recipes/3"]);
    assert_eq!(italian.recipes[0].dish_name, "Tuscan Bean Salad");
}

#[test]
fn vegan_recipes_in_store_order() {
    let cookbook = seeded_cookbook();
    let vegan = cookbook.vegan_recipes().unwrap();

    assert_eq!(
        uris(&vegan),
        vec!["/cookbook/v1.0/recipes/2", "/cookbook/v1.0/recipes/3"]
    );
}

#[test]
fn empty_filters_are_not_found() {
    let cookbook = empty_cookbook();

    assert!(matches!(cookbook.italian_recipes(), Err(CookbookError::NotFound(_))));
    assert!(matches!(cookbook.vegan_recipes(), Err(CookbookError::NotFound(_))));
}

#[test]
fn all_recipes_even_when_empty() {
    assert_eq!(seeded_cookbook().all_recipes().unwrap().recipes.len(), 3);
    assert!(empty_cookbook().all_recipes().unwrap().recipes.is_empty());
}

#[test]
fn get_recipe() {
    let cookbook = seeded_cookbook();

    let recipe = cookbook.recipe(1).unwrap().recipe;
    assert_eq!(recipe.dish_name, "Macaroni and Cheese");
    assert_eq!(recipe.uri, "/cookbook/v1.0/recipes/1");

    let err = cookbook.recipe(42).unwrap_err();
    assert_eq!(err.status_code(), 404);
}

#[test]
fn create_then_find() {
    let cookbook = seeded_cookbook();

    let created = cookbook.create_recipe(fingerling_potatoes()).unwrap().recipe;
    assert_eq!(created.uri, "/cookbook/v1.0/recipes/4");

    let stored = cookbook.repo().find_by_id(4).unwrap().unwrap();
    assert_eq!(stored.dish_name, "fingerling potatoes");
    assert_eq!(stored.cuisine, "American");
    assert_eq!(stored.ingredients, "fingerling potatoes");
    assert_eq!(stored.steps, "1. Wash the potatoes. 2. Cook the potatoes");
    assert!(stored.is_vegan);

    assert_eq!(cookbook.vegan_recipes().unwrap().recipes.len(), 3);
}

#[test]
fn create_in_empty_store_starts_at_one() {
    let cookbook = empty_cookbook();
    let created = cookbook.create_recipe(fingerling_potatoes()).unwrap().recipe;
    assert_eq!(created.uri, "/cookbook/v1.0/recipes/1");
}

#[test]
fn create_requires_fields() {
    let cookbook = seeded_cookbook();
    let mut fields = fingerling_potatoes();
    fields.ingredients = None;

    match cookbook.create_recipe(fields) {
        Err(CookbookError::Validation(e)) => assert_eq!(e.field, "ingredients"),
        other => panic!("expected validation error, got {other:?}"),
    }
    assert_eq!(cookbook.repo().all().unwrap().len(), 3);
}

#[test]
fn update_changes_only_supplied_fields() {
    let cookbook = seeded_cookbook();
    let before = cookbook.repo().find_by_id(1).unwrap().unwrap();

    let updated = cookbook
        .update_recipe(1, RecipeFields::new().dish_name("X"))
        .unwrap()
        .recipe;
    assert_eq!(updated.dish_name, "X");

    let after = cookbook.repo().find_by_id(1).unwrap().unwrap();
    assert_eq!(after.dish_name, "X");
    assert_eq!(after.cuisine, before.cuisine);
    assert_eq!(after.ingredients, before.ingredients);
    assert_eq!(after.steps, before.steps);
    assert_eq!(after.is_vegan, before.is_vegan);
}

#[test]
fn noop_update_leaves_record_unchanged() {
    let cookbook = seeded_cookbook();
    let before = cookbook.repo().find_by_id(2).unwrap().unwrap();

    let fields = RecipeFields::new().dish_name("").is_vegan(false);
    cookbook.update_recipe(2, fields).unwrap();

    assert_eq!(cookbook.repo().find_by_id(2).unwrap().unwrap(), before);
}

#[test]
fn update_missing_is_not_found() {
    let cookbook = seeded_cookbook();
    let err = cookbook
        .update_recipe(42, RecipeFields::new().dish_name("X"))
        .unwrap_err();
    assert!(matches!(err, CookbookError::NotFound(_)));
}

#[test]
fn delete_then_next_id_follows_last_record() {
    let cookbook = seeded_cookbook();

    assert!(cookbook.delete_recipe(2).unwrap().result);
    assert!(matches!(cookbook.recipe(2), Err(CookbookError::NotFound(_))));
    assert_eq!(cookbook.repo().next_id().unwrap(), 4);

    let ids: Vec<u64> = cookbook
        .repo()
        .filter_by(&RecipeFilter::IsVegan(true))
        .unwrap()
        .iter()
        .map(|r| r.id)
        .collect();
    assert_eq!(ids, vec![3]);
}

#[test]
fn delete_missing_is_not_found() {
    let cookbook = seeded_cookbook();
    let err = cookbook.delete_recipe(42).unwrap_err();
    assert_eq!(err.status_code(), 404);
    assert_eq!(
        cookbook.repo().delete_by_id(42),
        Err(StoreError::NotFound(42))
    );
}

#[test]
fn authenticate() {
    let cookbook = seeded_cookbook();

    let header = BasicAuth::new("gregory", "boleslavsky").header_value();
    assert_eq!(cookbook.authenticate(Some(&header)).unwrap(), "gregory");

    let err = cookbook.authenticate(None).unwrap_err();
    assert_eq!(err.status_code(), 403);

    let wrong = BasicAuth::new("gregory", "pw").header_value();
    assert!(matches!(
        cookbook.authenticate(Some(&wrong)),
        Err(CookbookError::Unauthorized(_))
    ));
}
