//! Nutrition per standard serving follows Health Promotion Board reference values
//! for common hawker dishes.

use crate::domain::dish_catalog::entities::{DishEntry, DishFamily, Nutrition};

struct DishSpec {
    name: &'static str,
    family: DishFamily,
    keywords: &'static [&'static str],
    generic_mappings: &'static [&'static str],
    signatures: &'static [&'static [&'static str]],
    nutrition: Nutrition,
    serving_size: &'static str,
}

impl From<&DishSpec> for DishEntry {
    fn from(spec: &DishSpec) -> Self {
        Self {
            name: spec.name.to_string(),
            family: spec.family,
            keywords: to_strings(spec.keywords),
            generic_mappings: to_strings(spec.generic_mappings),
            signature_combinations: spec.signatures.iter().map(|s| to_strings(s)).collect(),
            nutrition: spec.nutrition,
            serving_size: spec.serving_size.to_string(),
        }
    }
}

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[allow(clippy::too_many_arguments)]
const fn facts(
    calories: f64,
    protein: f64,
    carbs: f64,
    fat: f64,
    saturated_fat: f64,
    sodium: f64,
    fiber: f64,
    sugar: f64,
) -> Nutrition {
    Nutrition {
        calories,
        protein,
        carbs,
        fat,
        saturated_fat: Some(saturated_fat),
        sodium,
        fiber,
        sugar,
    }
}

const LOCAL_DISHES: &[DishSpec] = &[
    DishSpec {
        name: "Chicken Rice",
        family: DishFamily::Rice,
        keywords: &["chicken", "rice", "poultry", "roast", "steamed", "hainanese"],
        generic_mappings: &[
            "rice dish",
            "chicken dish",
            "poultry dish",
            "steamed chicken",
            "roasted chicken",
        ],
        signatures: &[&["chicken", "rice"], &["hainanese", "chicken"]],
        nutrition: facts(607.0, 25.0, 85.0, 15.0, 4.5, 820.0, 2.0, 3.0),
        serving_size: "1 plate (400g)",
    },
    DishSpec {
        name: "Laksa",
        family: DishFamily::Noodles,
        keywords: &[
            "laksa", "noodle", "soup", "curry", "coconut", "seafood", "shrimp", "prawn", "spicy",
        ],
        generic_mappings: &[
            "noodle soup",
            "curry soup",
            "seafood noodles",
            "spicy soup",
            "coconut soup",
        ],
        signatures: &[&["coconut", "curry", "noodle"], &["laksa", "noodle"]],
        nutrition: facts(569.0, 20.0, 65.0, 25.0, 14.0, 1580.0, 4.0, 8.0),
        serving_size: "1 bowl (550g)",
    },
    DishSpec {
        name: "Nasi Lemak",
        family: DishFamily::Rice,
        keywords: &[
            "nasi", "lemak", "rice", "coconut", "egg", "peanut", "anchovy", "ikan bilis",
            "sambal", "fried",
        ],
        generic_mappings: &[
            "rice dish",
            "coconut rice",
            "fried rice",
            "rice with egg",
            "rice plate",
        ],
        signatures: &[
            &["nasi", "lemak"],
            &["coconut", "rice"],
            &["sambal", "anchovy", "rice"],
        ],
        nutrition: facts(644.0, 15.0, 78.0, 30.0, 13.0, 920.0, 3.0, 5.0),
        serving_size: "1 plate (350g)",
    },
    DishSpec {
        name: "Bak Kut Teh",
        family: DishFamily::Soup,
        keywords: &[
            "bak kut teh",
            "pork",
            "soup",
            "rib",
            "meat",
            "broth",
            "bone",
            "herbal",
            "pepper",
        ],
        generic_mappings: &[
            "pork soup",
            "meat soup",
            "rib soup",
            "bone broth",
            "herbal soup",
        ],
        signatures: &[&["pork", "rib", "soup"], &["herbal", "pork"]],
        nutrition: facts(385.0, 35.0, 12.0, 22.0, 8.0, 1450.0, 1.0, 2.0),
        serving_size: "1 bowl (450g)",
    },
    DishSpec {
        name: "Char Kway Teow",
        family: DishFamily::Noodles,
        keywords: &[
            "char",
            "kway",
            "teow",
            "noodle",
            "fried",
            "seafood",
            "shrimp",
            "cockle",
            "egg",
            "flat noodles",
            "rice noodles",
        ],
        generic_mappings: &[
            "fried noodles",
            "stir fried noodles",
            "seafood noodles",
            "flat noodles",
            "wok noodles",
        ],
        signatures: &[
            &["char", "kway", "teow"],
            &["flat noodles", "cockle"],
            &["fried", "flat noodles"],
        ],
        nutrition: facts(744.0, 22.0, 92.0, 32.0, 12.0, 1680.0, 3.0, 6.0),
        serving_size: "1 plate (400g)",
    },
    DishSpec {
        name: "Wanton Mee",
        family: DishFamily::Noodles,
        keywords: &[
            "wanton",
            "wonton",
            "mee",
            "noodle",
            "dumpling",
            "char siew",
            "pork",
            "egg noodles",
        ],
        generic_mappings: &[
            "noodle dish",
            "dumpling noodles",
            "wonton noodles",
            "egg noodles",
            "pork noodles",
        ],
        signatures: &[
            &["wanton", "mee"],
            &["wonton", "noodle"],
            &["char siew", "noodle"],
        ],
        nutrition: facts(495.0, 22.0, 68.0, 15.0, 5.0, 1380.0, 3.0, 5.0),
        serving_size: "1 bowl (350g)",
    },
    DishSpec {
        name: "Roti Prata",
        family: DishFamily::Bread,
        keywords: &[
            "roti", "prata", "bread", "flatbread", "pancake", "dough", "pastry", "indian", "curry",
        ],
        generic_mappings: &[
            "flatbread",
            "pancake",
            "bread",
            "indian bread",
            "fried bread",
        ],
        signatures: &[&["roti", "prata"], &["flatbread", "curry"]],
        nutrition: facts(343.0, 8.0, 48.0, 14.0, 6.0, 520.0, 2.0, 4.0),
        serving_size: "1 piece (120g)",
    },
    DishSpec {
        name: "Fish Soup",
        family: DishFamily::Soup,
        keywords: &[
            "fish",
            "soup",
            "seafood",
            "broth",
            "clear soup",
            "sliced fish",
            "batang",
        ],
        generic_mappings: &[
            "fish soup",
            "seafood soup",
            "clear soup",
            "fish broth",
            "fish dish",
        ],
        signatures: &[&["sliced fish", "soup"], &["fish", "broth"]],
        nutrition: facts(280.0, 28.0, 18.0, 10.0, 3.0, 980.0, 2.0, 3.0),
        serving_size: "1 bowl (400g)",
    },
    DishSpec {
        name: "Hokkien Mee",
        family: DishFamily::Noodles,
        keywords: &[
            "hokkien",
            "mee",
            "noodle",
            "prawn",
            "seafood",
            "fried",
            "egg",
            "squid",
            "thick noodles",
        ],
        generic_mappings: &[
            "fried noodles",
            "seafood noodles",
            "prawn noodles",
            "thick noodles",
            "stir fried noodles",
        ],
        signatures: &[&["hokkien", "mee"], &["prawn", "fried", "noodle"]],
        nutrition: facts(632.0, 28.0, 75.0, 26.0, 9.0, 1520.0, 4.0, 5.0),
        serving_size: "1 plate (450g)",
    },
    DishSpec {
        name: "Mee Rebus",
        family: DishFamily::Noodles,
        keywords: &[
            "mee",
            "rebus",
            "noodle",
            "gravy",
            "yellow noodles",
            "potato",
            "egg",
            "sweet",
        ],
        generic_mappings: &[
            "noodle soup",
            "gravy noodles",
            "yellow noodles",
            "sweet noodles",
            "noodle dish",
        ],
        signatures: &[&["mee", "rebus"], &["gravy", "yellow noodles"]],
        nutrition: facts(498.0, 18.0, 72.0, 16.0, 5.0, 1240.0, 4.0, 12.0),
        serving_size: "1 bowl (400g)",
    },
    DishSpec {
        name: "Mee Siam",
        family: DishFamily::Noodles,
        keywords: &[
            "mee",
            "siam",
            "noodle",
            "spicy",
            "sour",
            "vermicelli",
            "tamarind",
            "bee hoon",
            "thin noodles",
        ],
        generic_mappings: &[
            "noodle soup",
            "spicy noodles",
            "sour noodles",
            "vermicelli",
            "thin noodles",
        ],
        signatures: &[&["mee", "siam"], &["tamarind", "vermicelli"]],
        nutrition: facts(452.0, 16.0, 68.0, 14.0, 4.0, 1180.0, 3.0, 8.0),
        serving_size: "1 bowl (350g)",
    },
    DishSpec {
        name: "Nasi Goreng",
        family: DishFamily::Rice,
        keywords: &["nasi", "goreng", "rice", "fried", "egg", "chicken", "shrimp", "malay"],
        generic_mappings: &[
            "fried rice",
            "rice dish",
            "rice with egg",
            "chicken rice",
            "shrimp rice",
        ],
        signatures: &[&["nasi", "goreng"], &["fried", "rice", "egg"]],
        nutrition: facts(568.0, 20.0, 78.0, 20.0, 6.0, 1320.0, 3.0, 6.0),
        serving_size: "1 plate (400g)",
    },
    DishSpec {
        name: "Carrot Cake (Chai Tow Kway)",
        family: DishFamily::Snack,
        keywords: &[
            "carrot cake",
            "chai tow kway",
            "radish",
            "turnip",
            "cake",
            "fried",
            "egg",
            "preserved radish",
        ],
        generic_mappings: &[
            "radish cake",
            "turnip cake",
            "fried cake",
            "egg dish",
            "savory cake",
        ],
        signatures: &[&["radish", "cake"], &["carrot cake", "fried"]],
        nutrition: facts(387.0, 12.0, 52.0, 16.0, 5.0, 980.0, 2.0, 3.0),
        serving_size: "1 plate (250g)",
    },
];

pub fn local_dishes() -> Vec<DishEntry> {
    LOCAL_DISHES.iter().map(DishEntry::from).collect()
}
