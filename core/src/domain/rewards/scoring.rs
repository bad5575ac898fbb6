use crate::domain::dish_catalog::entities::Nutrition;

pub const MAX_MEAL_POINTS: u32 = 100;

/// Gamified 0-100 score for one meal. Within each band the tighter range wins.
pub fn score_meal(nutrition: &Nutrition) -> u32 {
    let mut points = 10;

    points += if (15.0..=40.0).contains(&nutrition.protein) {
        20
    } else if nutrition.protein >= 10.0 {
        10
    } else {
        0
    };

    points += if nutrition.fiber >= 5.0 {
        15
    } else if nutrition.fiber >= 3.0 {
        10
    } else {
        0
    };

    points += if nutrition.sodium < 400.0 {
        15
    } else if nutrition.sodium < 600.0 {
        10
    } else {
        0
    };

    points += if nutrition.sugar < 5.0 {
        15
    } else if nutrition.sugar < 10.0 {
        10
    } else {
        0
    };

    points += macro_balance_points(nutrition);

    points += if (300.0..=700.0).contains(&nutrition.calories) {
        10
    } else if (200.0..=800.0).contains(&nutrition.calories) {
        5
    } else {
        0
    };

    points.min(MAX_MEAL_POINTS)
}

/// Ratios are over macro grams, not calories.
fn macro_balance_points(nutrition: &Nutrition) -> u32 {
    let total = nutrition.protein + nutrition.carbs + nutrition.fat;
    if total <= 0.0 {
        return 0;
    }

    let protein = nutrition.protein / total;
    let carbs = nutrition.carbs / total;
    let fat = nutrition.fat / total;

    if (0.20..=0.35).contains(&protein)
        && (0.45..=0.65).contains(&carbs)
        && (0.20..=0.35).contains(&fat)
    {
        15
    } else if protein >= 0.15 && fat <= 0.40 {
        8
    } else {
        0
    }
}

pub fn points_reason(points: u32) -> &'static str {
    match points {
        80.. => "Excellent balanced meal!",
        60..=79 => "Great nutritional choice!",
        40..=59 => "Good healthy meal!",
        20..=39 => "Nice meal logged!",
        _ => "Meal tracked!",
    }
}
