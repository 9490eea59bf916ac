//! Demo recipes loaded at startup.

use crate::recipe::Recipe;

/// The three demo recipes, ids 1 to 3.
pub fn demo_recipes() -> Vec<Recipe> {
    vec![
        Recipe {
            id: 1,
            dish_name: "Macaroni and Cheese".into(),
            cuisine: "American".into(),
            ingredients: "any small size pasta, cheese that melts well".into(),
            steps: "1. Cook the pasta 2. Shred the cheese 3. Mixed cooked pasta and shredded cheese \
                    4. Heat on a stove till cheese is melted or microwave for 2 minutes"
                .into(),
            is_vegan: false,
        },
        Recipe {
            id: 2,
            dish_name: "Korean Carrots".into(),
            cuisine: "Korean".into(),
            ingredients: "carrots, sesame oil, rice vinegar, fresh garlic, coriander seeds, cayenne pepper"
                .into(),
            steps: "1. Shred the carrots 2. Mix with the rest of the ingredients \
                    3. Leave in the refrigerator for 1 hour"
                .into(),
            is_vegan: true,
        },
        Recipe {
            id: 3,
            dish_name: "Tuscan Bean Salad".into(),
            cuisine: "Italian".into(),
            ingredients: "cooked white beans (Canelloni or any other), chopped green onion, balsamic vinegar, olive oil"
                .into(),
            steps: "1. Mix all ingredients 2. Let the dish sit in rerigerator for 1 hour".into(),
            is_vegan: true,
        },
    ]
}
