//! Shared catalog and seed-case builders for integration tests across
//! crates. The data mirrors a small but realistic catering catalog: every
//! diet label and ingredient name lines up with the built-in knowledge base.

use brigade_core::menu::{
    Beverage, CaseOutcome, Complexity, CulinaryStyle, CulturalTradition, Dish, DishCategory,
    DishType, EventType, Flavor, Request, Season, Temperature,
};
use brigade_store::{CaseStore, SeedCase};

use Complexity::*;
use CulinaryStyle::*;
use DishCategory::*;
use DishType::*;
use Flavor::*;
use Season::*;
use Temperature::*;

#[allow(clippy::too_many_arguments)]
fn dish(
    id: &str,
    name: &str,
    dish_type: DishType,
    price: f64,
    category: DishCategory,
    styles: &[CulinaryStyle],
    seasons: &[Season],
    temperature: Temperature,
    complexity: Complexity,
    calories: u32,
    flavors: &[Flavor],
    diets: &[&str],
    ingredients: &[&str],
    cultures: &[CulturalTradition],
) -> Dish {
    Dish {
        id: id.into(),
        name: name.into(),
        dish_type,
        price,
        category,
        styles: styles.to_vec(),
        seasons: seasons.to_vec(),
        temperature,
        complexity,
        calories,
        max_guests: 300,
        flavors: flavors.to_vec(),
        diets: diets.iter().map(|d| d.to_string()).collect(),
        ingredients: ingredients.iter().map(|i| i.to_string()).collect(),
        compatible_beverages: vec![],
        cultural_traditions: cultures.to_vec(),
    }
}

fn beverage(
    id: &str,
    name: &str,
    alcoholic: bool,
    price: f64,
    kind: &str,
    subtype: Option<&str>,
    flavors: &[Flavor],
) -> Beverage {
    Beverage {
        id: id.into(),
        name: name.into(),
        alcoholic,
        price,
        kind: kind.into(),
        subtype: subtype.map(String::from),
        compatible_flavors: flavors.to_vec(),
    }
}

/// The full fixture dish catalog.
pub fn catalog_dishes() -> Vec<Dish> {
    use CulturalTradition::*;
    vec![
        // --- Starters ---
        dish(
            "smoked-salmon-salad", "Smoked Salmon Layered Salad", Starter, 21.0, Salad,
            &[Classic], &[Any], Cold, Medium, 109, &[Sour, Salty],
            &["pescatarian", "gluten-free", "dairy-free"],
            &["salmon", "lemon", "honey", "olive-oil", "pepper", "salt"],
            &[Nordic],
        ),
        dish(
            "carrot-ginger-soup", "Carrot-Ginger Soup", Starter, 8.0, Soup,
            &[Classic], &[Winter, Autumn], Hot, Medium, 76, &[Salty],
            &["vegan", "vegetarian", "gluten-free", "dairy-free", "pork-free"],
            &["carrots", "ginger", "garlic", "olive-oil", "pepper", "salt"],
            &[],
        ),
        dish(
            "gazpacho", "Gazpacho Andaluz", Starter, 9.5, Soup,
            &[Regional], &[Summer], Cold, Low, 90, &[Sour, Salty],
            &["vegan", "vegetarian", "gluten-free", "dairy-free", "pork-free"],
            &["tomato", "cucumber", "garlic", "olive-oil", "vinegar", "salt"],
            &[Spanish, Mediterranean],
        ),
        dish(
            "caprese-tower", "Caprese Tower with Burrata", Starter, 16.0, Salad,
            &[Regional], &[Summer], Cold, Low, 220, &[Fatty, Salty],
            &["vegetarian", "gluten-free"],
            &["tomato", "cheese", "basil", "olive-oil", "vinegar"],
            &[Italian],
        ),
        dish(
            "pumpkin-cream", "Pumpkin Cream with Toasted Seeds", Starter, 10.0, Cream,
            &[Modern], &[Autumn, Winter], Hot, Low, 150, &[Sweet, Salty],
            &["vegan", "vegetarian", "gluten-free", "dairy-free", "pork-free"],
            &["pumpkin", "coconut-milk", "seeds", "spices"],
            &[],
        ),
        dish(
            "esqueixada", "Esqueixada de Bacalla", Starter, 14.0, Fish,
            &[Regional], &[Spring, Summer], Cold, Medium, 180, &[Salty, Sour],
            &["dairy-free", "gluten-free", "pescatarian"],
            &["cod", "tomato", "onion", "olive-oil", "vinegar"],
            &[Catalan],
        ),
        dish(
            "asian-salad-bowl", "Fusion Salad Bowl", Starter, 12.0, Salad,
            &[Fusion], &[Summer], Cold, Low, 150, &[Salty, Sour],
            &["vegan", "vegetarian", "gluten-free", "dairy-free", "pork-free"],
            &["cabbage", "carrots", "ginger", "sesame-oil", "lime"],
            &[Japanese],
        ),
        dish(
            "foie-royale", "Foie Royale with Late-Harvest Reduction", Starter, 26.0, Cream,
            &[Gourmet, Sibarita], &[Any], Warm, High, 300, &[Fatty, Umami],
            &["gluten-free"],
            &["duck", "butter", "wine"],
            &[French],
        ),
        // --- Mains ---
        dish(
            "chicken-tagine", "Chicken Tagine", MainCourse, 21.0, Poultry,
            &[Classic], &[Spring, Autumn], Hot, High, 228, &[Salty, Umami],
            &["dairy-free", "pork-free", "gluten-free"],
            &["chicken", "cumin", "cinnamon", "garlic", "honey", "olive-oil", "onion"],
            &[Moroccan],
        ),
        dish(
            "grilled-sea-bass", "Grilled Sea Bass with Seasonal Vegetables", MainCourse, 28.0,
            Fish, &[Regional], &[Spring, Summer], Hot, Medium, 280, &[Salty, Umami],
            &["dairy-free", "gluten-free", "pescatarian", "pork-free"],
            &["sea-bass", "zucchini", "peppers", "olive-oil", "lemon", "herbs"],
            &[Mediterranean],
        ),
        dish(
            "sous-vide-beef", "Sous-Vide Beef Tenderloin", MainCourse, 32.0, Meat,
            &[Sibarita], &[Spring, Autumn, Winter], Hot, High, 420, &[Umami, Fatty, Salty],
            &["gluten-free", "dairy-free", "pork-free"],
            &["beef", "wine", "herbs", "garlic", "olive-oil"],
            &[French],
        ),
        dish(
            "wagyu-tenderloin", "Charcoal Wagyu Tenderloin", MainCourse, 42.0, Meat,
            &[Sibarita, Gourmet], &[Any], Hot, High, 450, &[Umami, Fatty],
            &["gluten-free", "dairy-free", "pork-free"],
            &["beef", "wine", "herbs", "olive-oil"],
            &[French],
        ),
        dish(
            "buddha-bowl", "Buddha Bowl with Roasted Vegetables", MainCourse, 22.0, Legume,
            &[Modern], &[Any], Warm, Medium, 380, &[Salty, Umami],
            &["vegan", "vegetarian", "gluten-free", "dairy-free", "pork-free"],
            &["quinoa", "chickpeas", "sweet-potato", "kale", "tahini"],
            &[],
        ),
        dish(
            "turkey-chili", "Slow-Cooker Turkey Chili", MainCourse, 18.0, Legume,
            &[Regional], &[Winter], Hot, High, 257, &[Salty, Sour, Umami],
            &["dairy-free", "pork-free", "gluten-free"],
            &["turkey", "beans", "tomato", "chili", "pepper", "salt"],
            &[Mexican],
        ),
        dish(
            "mediterranean-pasta", "Mediterranean Vegetable Pasta", MainCourse, 16.0, Pasta,
            &[Modern], &[Any], Hot, Low, 280, &[Salty, Umami],
            &["vegetarian"],
            &["pasta", "cheese", "tomato", "basil", "garlic", "olive-oil"],
            &[Italian],
        ),
        dish(
            "pollastre-samfaina", "Pollastre amb Samfaina", MainCourse, 22.0, Poultry,
            &[Regional], &[Spring, Summer], Hot, High, 350, &[Salty, Umami],
            &["dairy-free", "gluten-free", "pork-free"],
            &["chicken", "eggplant", "zucchini", "peppers", "tomato", "garlic"],
            &[Catalan],
        ),
        dish(
            "teriyaki-chicken-rice", "Teriyaki Chicken with Jasmine Rice", MainCourse, 18.0,
            Poultry, &[Fusion], &[Summer], Hot, Medium, 380, &[Sweet, Salty, Umami],
            &["dairy-free", "pork-free"],
            &["chicken", "rice", "soy-sauce", "ginger", "garlic", "honey"],
            &[Japanese],
        ),
        dish(
            "miso-glazed-tofu", "Miso-Glazed Tofu on Rice", MainCourse, 19.0, Legume,
            &[Modern], &[Any], Hot, Medium, 320, &[Umami, Salty],
            &["vegan", "vegetarian", "dairy-free", "gluten-free", "pork-free"],
            &["tofu", "miso", "rice", "ginger", "sesame-oil"],
            &[Japanese],
        ),
        dish(
            "truffle-risotto", "Mushroom Risotto", MainCourse, 38.0, Rice,
            &[Gourmet], &[Autumn, Winter, Spring], Hot, High, 420, &[Umami, Fatty],
            &["vegetarian", "gluten-free"],
            &["rice", "parmesan", "butter", "mushrooms"],
            &[Italian],
        ),
        // --- Desserts ---
        dish(
            "crema-catalana", "Crema Catalana", Dessert, 10.0, Cream,
            &[Regional], &[Any], Cold, Medium, 280, &[Sweet],
            &["vegetarian", "gluten-free"],
            &["egg", "milk", "sugar", "cinnamon", "lemon"],
            &[Catalan],
        ),
        dish(
            "apple-pie", "Classic Apple Pie", Dessert, 8.0, Fruit,
            &[Classic], &[Autumn, Winter], Warm, Medium, 320, &[Sweet],
            &["vegetarian"],
            &["apple", "sugar", "cinnamon", "flour", "butter"],
            &[],
        ),
        dish(
            "vegan-chocolate-mousse", "Dark Chocolate Mousse", Dessert, 11.0, Cream,
            &[Modern], &[Any], Cold, Low, 280, &[Sweet, Bitter],
            &["vegan", "vegetarian", "gluten-free", "dairy-free", "pork-free"],
            &["chocolate", "coconut-cream", "maple-syrup"],
            &[],
        ),
        dish(
            "mango-panna-cotta", "Mango Coconut Panna Cotta", Dessert, 9.0, Cream,
            &[Fusion], &[Summer], Cold, Medium, 220, &[Sweet, Fatty],
            &["vegetarian", "gluten-free"],
            &["mango", "coconut-milk", "sugar", "gelatin"],
            &[],
        ),
        dish(
            "tarta-santiago", "Tarta de Santiago", Dessert, 12.0, Cake,
            &[Regional], &[Any], Warm, Medium, 350, &[Sweet],
            &["vegetarian", "gluten-free"],
            &["almonds", "egg", "sugar", "lemon"],
            &[Galician, Spanish],
        ),
        dish(
            "fruit-salad-mint", "Fruit Salad with Mint", Dessert, 6.5, Fruit,
            &[Classic], &[Summer], Cold, Low, 140, &[Sweet, Sour],
            &["vegan", "vegetarian", "gluten-free", "dairy-free", "nut-free", "pork-free"],
            &["apple", "mango", "berries", "lime", "mint"],
            &[],
        ),
        dish(
            "chocolate-sphere", "Chocolate Sphere with Liquid Heart", Dessert, 14.0, Cream,
            &[Sibarita], &[Any], Warm, High, 380, &[Sweet, Bitter],
            &["vegetarian"],
            &["chocolate", "cream", "sugar", "vanilla"],
            &[French],
        ),
        dish(
            "grand-dessert", "Grand Dessert Plate", Dessert, 18.0, Cream,
            &[Gourmet], &[Any], Cold, High, 350, &[Sweet, Fatty],
            &["vegetarian", "gluten-free"],
            &["chocolate", "cream", "berries", "sugar"],
            &[French],
        ),
        dish(
            "baklava", "Pistachio-Walnut Baklava", Dessert, 9.5, Pastry,
            &[Regional], &[Any], Warm, Medium, 400, &[Sweet, Fatty],
            &["vegetarian"],
            &["walnuts", "honey", "flour", "butter", "cinnamon"],
            &[Turkish, Greek],
        ),
    ]
}

/// The full fixture beverage catalog.
pub fn catalog_beverages() -> Vec<Beverage> {
    vec![
        beverage("albarino", "Albarino Rias Baixas", true, 4.5, "white-wine", Some("fruity"), &[Sweet, Umami]),
        beverage("verdejo", "Verdejo de Rueda", true, 4.0, "white-wine", Some("dry"), &[Salty, Sour]),
        beverage("rioja-reserva", "Rioja Reserva", true, 6.0, "red-wine", Some("full-bodied"), &[Fatty, Umami]),
        beverage("garnacha-joven", "Garnacha Joven", true, 3.5, "red-wine", Some("young"), &[Bitter, Umami]),
        beverage("cava-brut", "Cava Brut Nature", true, 5.0, "sparkling-wine", Some("sparkling"), &[Salty, Fatty, Sweet]),
        beverage("vintage-champagne", "Vintage Champagne", true, 12.0, "sparkling-wine", Some("sparkling"), &[Salty, Fatty, Sweet]),
        beverage("pedro-ximenez", "Pedro Ximenez", true, 6.0, "sweet-wine", Some("sweet"), &[Sweet, Umami, Fatty]),
        beverage("still-water", "Still Mineral Water", false, 1.5, "soft-drink", None, &[]),
        beverage("sparkling-water", "Sparkling Water", false, 2.0, "soft-drink", None, &[]),
        beverage("lemonade", "Fresh Lemonade", false, 3.0, "soft-drink", None, &[Sweet, Sour]),
        beverage("green-tea-mint", "Green Tea with Mint", false, 2.2, "herbal-tea", None, &[]),
        beverage("kombucha", "Artisan Kombucha", false, 3.5, "kombucha", None, &[Sour]),
    ]
}

fn seed(
    id: &str,
    request: Request,
    courses: (&str, &str, &str, &str),
    style: Option<CulinaryStyle>,
    theme: Option<CulturalTradition>,
    score: f64,
    comment: &str,
) -> SeedCase {
    SeedCase {
        id: id.into(),
        request,
        starter_id: courses.0.into(),
        main_course_id: courses.1.into(),
        dessert_id: courses.2.into(),
        beverage_id: courses.3.into(),
        dominant_style: style,
        cultural_theme: theme,
        outcome: CaseOutcome {
            success: score >= 3.0,
            score,
            comment: comment.into(),
        },
        negative: false,
        usage_count: 0,
        created_at: None,
        last_used: None,
    }
}

#[allow(clippy::too_many_arguments)]
fn request(
    event: EventType,
    season: Season,
    guests: u32,
    band: (Option<f64>, Option<f64>),
    wine: bool,
    style: Option<CulinaryStyle>,
    culture: Option<CulturalTradition>,
    diets: &[&str],
) -> Request {
    Request {
        id: format!("req-{event:?}-{guests}").to_lowercase(),
        event_type: event,
        season,
        num_guests: guests,
        price_min: band.0,
        price_max: band.1,
        wants_wine: wine,
        preferred_style: style,
        cultural_preference: culture,
        required_diets: diets.iter().map(|d| d.to_string()).collect(),
        soft_diets: vec![],
        restricted_ingredients: vec![],
        soft_restricted_ingredients: vec![],
    }
}

/// Twelve seed cases spanning every event type, including one documented
/// failure.
pub fn seed_cases() -> Vec<SeedCase> {
    use CulturalTradition::*;
    use EventType::*;
    let mut cases = vec![
        seed(
            "wedding-gourmet-001",
            request(Wedding, Summer, 150, (Some(80.0), Some(120.0)), true, Some(Gourmet), None, &[]),
            ("smoked-salmon-salad", "wagyu-tenderloin", "grand-dessert", "vintage-champagne"),
            Some(Gourmet), None, 4.8,
            "Elegant balance, impeccable presentation",
        ),
        seed(
            "wedding-sibarita-002",
            request(Wedding, Spring, 100, (Some(80.0), Some(130.0)), true, Some(Sibarita), None, &[]),
            ("foie-royale", "sous-vide-beef", "chocolate-sphere", "vintage-champagne"),
            Some(Sibarita), None, 4.6,
            "Impressive technique, guests delighted",
        ),
        seed(
            "wedding-regional-003",
            request(Wedding, Summer, 120, (Some(55.0), Some(90.0)), true, Some(Regional), Some(Mediterranean), &[]),
            ("caprese-tower", "grilled-sea-bass", "tarta-santiago", "albarino"),
            Some(Regional), Some(Mediterranean), 4.8,
            "Fresh summer flavors, authentic",
        ),
        seed(
            "wedding-mediterranean-004",
            request(Wedding, Summer, 90, (Some(50.0), Some(85.0)), true, None, Some(Mediterranean), &[]),
            ("caprese-tower", "grilled-sea-bass", "mango-panna-cotta", "cava-brut"),
            Some(Regional), Some(Mediterranean), 4.5,
            "Light and seasonal",
        ),
        seed(
            "corporate-modern-001",
            request(Corporate, Autumn, 80, (Some(35.0), Some(50.0)), false, Some(Modern), None, &["vegetarian"]),
            ("pumpkin-cream", "mediterranean-pasta", "vegan-chocolate-mousse", "sparkling-water"),
            Some(Modern), None, 4.5,
            "Efficient service, excellent vegetarian options",
        ),
        seed(
            "corporate-vegan-002",
            request(Corporate, Autumn, 100, (Some(40.0), Some(55.0)), false, Some(Modern), None, &["vegan"]),
            ("pumpkin-cream", "buddha-bowl", "vegan-chocolate-mousse", "kombucha"),
            Some(Modern), None, 4.4,
            "The vegan proposal surprised everyone",
        ),
        seed(
            "familiar-classic-001",
            request(Familiar, Winter, 40, (Some(25.0), Some(40.0)), true, Some(Classic), None, &[]),
            ("carrot-ginger-soup", "turkey-chili", "apple-pie", "garnacha-joven"),
            Some(Classic), None, 4.7,
            "Comforting, like home cooking",
        ),
        seed(
            "familiar-summer-002",
            request(Familiar, Summer, 30, (Some(20.0), Some(36.0)), false, None, None, &[]),
            ("gazpacho", "mediterranean-pasta", "fruit-salad-mint", "lemonade"),
            None, None, 4.2,
            "Simple and fresh",
        ),
        seed(
            "congress-fusion-001",
            request(Congress, Summer, 200, (Some(30.0), Some(45.0)), false, Some(Fusion), None, &["gluten-free"]),
            ("asian-salad-bowl", "miso-glazed-tofu", "fruit-salad-mint", "green-tea-mint"),
            Some(Fusion), None, 4.3,
            "Great logistics, interesting flavors",
        ),
        seed(
            "christening-regional-001",
            request(Christening, Spring, 50, (Some(45.0), Some(60.0)), true, Some(Regional), Some(Catalan), &[]),
            ("esqueixada", "pollastre-samfaina", "crema-catalana", "cava-brut"),
            Some(Regional), Some(Catalan), 4.9,
            "Authentic Catalan cooking, guests enchanted",
        ),
        seed(
            "communion-sibarita-001",
            request(Communion, Spring, 60, (Some(55.0), Some(70.0)), true, Some(Sibarita), None, &[]),
            ("gazpacho", "sous-vide-beef", "chocolate-sphere", "rioja-reserva"),
            Some(Sibarita), None, 4.6,
            "Striking presentation, innovative technique",
        ),
    ];

    let mut negative = seed(
        "wedding-winter-neg-001",
        request(Wedding, Winter, 120, (Some(40.0), Some(60.0)), false, None, None, &[]),
        ("caprese-tower", "turkey-chili", "fruit-salad-mint", "lemonade"),
        None, None, 2.0,
        "Cold summer starter in winter, guests complained",
    );
    negative.negative = true;
    negative.outcome.success = false;
    cases.push(negative);

    cases
}

/// A store seeded with the full fixture data set.
pub fn seeded_store() -> CaseStore {
    CaseStore::from_seed(catalog_dishes(), catalog_beverages(), seed_cases())
        .expect("fixture seed data is consistent")
}

/// Look up a fixture dish by id.
pub fn fixture_dish(id: &str) -> Dish {
    catalog_dishes()
        .into_iter()
        .find(|d| d.id == id)
        .unwrap_or_else(|| panic!("no fixture dish {id}"))
}

/// Look up a fixture beverage by id.
pub fn fixture_beverage(id: &str) -> Beverage {
    catalog_beverages()
        .into_iter()
        .find(|b| b.id == id)
        .unwrap_or_else(|| panic!("no fixture beverage {id}"))
}

/// The wedding scenario request used by several integration tests.
pub fn wedding_request() -> Request {
    request(
        EventType::Wedding,
        Season::Summer,
        100,
        (Some(80.0), Some(120.0)),
        true,
        None,
        None,
        &[],
    )
}

/// A fully parameterized request builder for tests.
#[allow(clippy::too_many_arguments)]
pub fn make_request(
    event: EventType,
    season: Season,
    guests: u32,
    price_min: Option<f64>,
    price_max: Option<f64>,
    wants_wine: bool,
    style: Option<CulinaryStyle>,
    culture: Option<CulturalTradition>,
    diets: &[&str],
) -> Request {
    request(event, season, guests, (price_min, price_max), wants_wine, style, culture, diets)
}
