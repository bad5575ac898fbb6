use chrono::{Datelike, Month, NaiveDate};

use crate::domain::{
    common::entities::app_errors::CoreError,
    daily_intake::entities::{DailyIntake, NutrientTotals},
    meal_history::entities::{
        Achievement, AverageStats, DailyStats, MonthlyWrapped, NutrientTrend, TopMeal, Trend,
        TrendNutrient,
    },
};

const TOP_MEALS: usize = 5;
const CONSISTENCY_DAYS: usize = 25;
const POINT_MASTER_POINTS: u32 = 1000;
const EXPERT_MEAL_POINTS: u32 = 80;
const DATA_COLLECTOR_MEALS: usize = 60;

const SCORE_DAYS: f64 = 30.0;
const SCORE_POINTS: f64 = 2000.0;
const CONSISTENCY_WEIGHT: f64 = 30.0;
const POINTS_WEIGHT: f64 = 40.0;
const TRENDS_WEIGHT: f64 = 30.0;

pub fn average_stats(stats: &[DailyStats]) -> AverageStats {
    let active: Vec<&DailyStats> = stats.iter().filter(|s| s.meal_count > 0).collect();
    if active.is_empty() {
        return AverageStats::default();
    }

    let days = active.len() as f64;
    let avg = |pick: fn(&NutrientTotals) -> f64| {
        (active.iter().map(|s| pick(&s.totals)).sum::<f64>() / days).round()
    };

    AverageStats {
        calories: avg(|t| t.calories),
        protein: avg(|t| t.protein),
        carbs: avg(|t| t.carbs),
        fat: avg(|t| t.fat),
        sodium: avg(|t| t.sodium),
        fiber: avg(|t| t.fiber),
        sugar: avg(|t| t.sugar),
        total_meals: active.iter().map(|s| s.meal_count).sum(),
        active_days: active.len(),
    }
}

/// Every calendar date of `month` (1-12) in `year`.
pub fn month_dates(year: i32, month: u32) -> Result<Vec<NaiveDate>, CoreError> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| CoreError::Invalid(format!("no such month: {year}-{month}")))?;

    Ok(first
        .iter_days()
        .take_while(|d| d.month() == month)
        .collect())
}

pub fn previous_month(year: i32, month: u32) -> (i32, u32) {
    if month == 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    }
}

fn meal_totals(intakes: &[DailyIntake]) -> (NutrientTotals, usize) {
    let mut totals = NutrientTotals::default();
    let mut meals = 0;
    for meal in intakes.iter().flat_map(|i| i.meals.iter()) {
        totals.add(&meal.nutrition);
        meals += 1;
    }
    (totals, meals)
}

/// Ranked by average points; ties keep first-logged order.
fn top_meals(intakes: &[DailyIntake]) -> Vec<TopMeal> {
    let mut tally: Vec<(String, u32, u32)> = Vec::new();
    for meal in intakes.iter().flat_map(|i| i.meals.iter()) {
        match tally.iter_mut().find(|(name, _, _)| *name == meal.name) {
            Some((_, count, points)) => {
                *count += 1;
                *points += meal.points;
            }
            None => tally.push((meal.name.clone(), 1, meal.points)),
        }
    }

    let mut top: Vec<TopMeal> = tally
        .into_iter()
        .map(|(name, count, points)| TopMeal {
            name,
            count,
            avg_points: (points as f64 / count as f64).round() as u32,
        })
        .collect();
    top.sort_by(|a, b| b.avg_points.cmp(&a.avg_points));
    top.truncate(TOP_MEALS);
    top
}

/// Trends need a previous month with meals; unchanged nutrients are left out.
fn nutrient_trends(
    current: (&NutrientTotals, usize),
    previous: (&NutrientTotals, usize),
) -> Vec<NutrientTrend> {
    TrendNutrient::ALL
        .into_iter()
        .filter_map(|nutrient| {
            let now = nutrient.per_meal(current.0, current.1);
            let before = nutrient.per_meal(previous.0, previous.1);
            if before <= 0.0 {
                return None;
            }

            let change_percent = ((now - before) / before * 100.0).round() as i64;
            if change_percent == 0 {
                return None;
            }

            let trend = if now > before {
                Trend::Up
            } else if now < before {
                Trend::Down
            } else {
                Trend::Stable
            };
            let is_good = if nutrient.higher_is_better() {
                now > before
            } else {
                now < before
            };

            Some(NutrientTrend {
                nutrient,
                change_percent,
                trend,
                is_good,
            })
        })
        .collect()
}

fn achievements(
    total_points: u32,
    active_days: usize,
    total_meals: usize,
    top: &[TopMeal],
    trends: &[NutrientTrend],
) -> Vec<Achievement> {
    let improved =
        |nutrient: TrendNutrient| trends.iter().any(|t| t.nutrient == nutrient && t.is_good);

    let mut out = Vec::new();
    if active_days >= CONSISTENCY_DAYS {
        out.push(Achievement::ConsistencyChampion);
    }
    if total_points >= POINT_MASTER_POINTS {
        out.push(Achievement::PointMaster);
    }
    if top.first().is_some_and(|m| m.avg_points >= EXPERT_MEAL_POINTS) {
        out.push(Achievement::NutritionExpert);
    }
    if improved(TrendNutrient::Fiber) {
        out.push(Achievement::FiberBoost);
    }
    if improved(TrendNutrient::Sodium) {
        out.push(Achievement::SodiumReducer);
    }
    if total_meals >= DATA_COLLECTOR_MEALS {
        out.push(Achievement::DataCollector);
    }
    out
}

fn health_score(active_days: usize, total_points: u32, good_trends: usize) -> u32 {
    let consistency = (active_days as f64 / SCORE_DAYS * CONSISTENCY_WEIGHT).min(CONSISTENCY_WEIGHT);
    let points = (total_points as f64 / SCORE_POINTS * POINTS_WEIGHT).min(POINTS_WEIGHT);
    let trends = (good_trends as f64 / TrendNutrient::ALL.len() as f64 * TRENDS_WEIGHT)
        .min(TRENDS_WEIGHT);

    (consistency + points + trends).round() as u32
}

/// Summarises one month of intake against the month before it.
pub fn monthly_wrapped(
    year: i32,
    month: u32,
    current: &[DailyIntake],
    previous: &[DailyIntake],
) -> Result<MonthlyWrapped, CoreError> {
    let month_name = u8::try_from(month)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .ok_or_else(|| CoreError::Invalid(format!("no such month: {month}")))?
        .name()
        .to_string();

    let in_month: Vec<DailyIntake> = current
        .iter()
        .filter(|i| i.date.year() == year && i.date.month() == month)
        .cloned()
        .collect();

    let (totals, total_meals) = meal_totals(&in_month);
    let (prev_totals, prev_meals) = meal_totals(previous);

    let total_points: u32 = in_month.iter().map(DailyIntake::total_points).sum();
    let active_days = in_month.iter().filter(|i| i.meal_count() > 0).count();
    let top_meals = top_meals(&in_month);
    let nutrient_trends = nutrient_trends((&totals, total_meals), (&prev_totals, prev_meals));
    let achievements = achievements(
        total_points,
        active_days,
        total_meals,
        &top_meals,
        &nutrient_trends,
    );
    let good_trends = nutrient_trends.iter().filter(|t| t.is_good).count();

    let avg_daily_calories = if active_days > 0 {
        (totals.calories / active_days as f64).round()
    } else {
        0.0
    };

    Ok(MonthlyWrapped {
        year,
        month,
        month_name,
        total_points,
        total_meals,
        active_days,
        top_meals,
        nutrient_trends,
        achievements,
        avg_daily_calories,
        health_score: health_score(active_days, total_points, good_trends),
    })
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::domain::{
        daily_intake::entities::{LoggedMeal, LoggedMealConfig},
        dish_catalog::entities::Nutrition,
        dish_matching::entities::MatchResult,
    };

    fn nutrition(calories: f64, protein: f64, sodium: f64, fiber: f64, sugar: f64) -> Nutrition {
        Nutrition {
            calories,
            protein,
            sodium,
            fiber,
            sugar,
            ..Nutrition::default()
        }
    }

    fn intake(date: NaiveDate, meals: &[(&str, Nutrition, u32)]) -> DailyIntake {
        let mut intake = DailyIntake::empty(date);
        for (name, nutrition, points) in meals {
            intake.add_meal(LoggedMeal::new(LoggedMealConfig {
                match_result: MatchResult::no_match(*name, 0.5),
                fallback_nutrition: *nutrition,
                points: *points,
                logged_at: Utc::now(),
            }));
        }
        intake
    }

    fn jan(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, day).unwrap()
    }

    fn dec(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 12, day).unwrap()
    }

    #[test]
    fn averages_skip_empty_days() {
        let n = nutrition(500.0, 20.0, 800.0, 4.0, 5.0);
        let stats: Vec<DailyStats> = [
            intake(jan(1), &[("A", n, 50), ("B", n, 50)]),
            intake(jan(2), &[]),
            intake(jan(3), &[("C", n, 50)]),
        ]
        .iter()
        .map(DailyStats::from)
        .collect();

        let avg = average_stats(&stats);

        assert_eq!(avg.calories, 750.0);
        assert_eq!(avg.sodium, 1200.0);
        assert_eq!(avg.total_meals, 3);
        assert_eq!(avg.active_days, 2);
    }

    #[test]
    fn averages_of_nothing_are_zero() {
        assert_eq!(average_stats(&[]), AverageStats::default());
    }

    #[test]
    fn month_dates_cover_the_calendar_month() {
        assert_eq!(month_dates(2024, 2).unwrap().len(), 29);
        assert_eq!(
            month_dates(2025, 12).unwrap().last(),
            Some(&NaiveDate::from_ymd_opt(2025, 12, 31).unwrap())
        );
        assert!(matches!(month_dates(2025, 13), Err(CoreError::Invalid(_))));
        assert_eq!(previous_month(2025, 1), (2024, 12));
    }

    #[test]
    fn wrapped_compares_against_previous_month() {
        let fish_soup = nutrition(400.0, 30.0, 500.0, 4.0, 2.0);
        let current = [
            intake(jan(2), &[("Fish Soup", fish_soup, 90)]),
            intake(jan(3), &[("Fish Soup", fish_soup, 90)]),
            intake(
                jan(4),
                &[
                    ("Laksa", nutrition(569.0, 20.0, 1580.0, 4.0, 8.0), 68),
                    ("Char Kway Teow", nutrition(744.0, 22.0, 1680.0, 3.0, 6.0), 63),
                ],
            ),
        ];
        let heavy = nutrition(600.0, 17.0, 1700.0, 2.0, 9.0);
        let previous = [intake(dec(20), &[("Mee Rebus", heavy, 40), ("Mee Rebus", heavy, 40)])];

        let wrapped = monthly_wrapped(2025, 1, &current, &previous).unwrap();

        assert_eq!(wrapped.month_name, "January");
        assert_eq!(wrapped.total_points, 311);
        assert_eq!(wrapped.total_meals, 4);
        assert_eq!(wrapped.active_days, 3);
        assert_eq!(wrapped.avg_daily_calories, 704.0);

        let names: Vec<&str> = wrapped.top_meals.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, ["Fish Soup", "Laksa", "Char Kway Teow"]);
        assert_eq!(wrapped.top_meals[0].count, 2);

        let changes: Vec<(TrendNutrient, i64, Trend)> = wrapped
            .nutrient_trends
            .iter()
            .map(|t| (t.nutrient, t.change_percent, t.trend))
            .collect();
        assert_eq!(
            changes,
            [
                (TrendNutrient::Protein, 50, Trend::Up),
                (TrendNutrient::Fiber, 88, Trend::Up),
                (TrendNutrient::Sodium, -37, Trend::Down),
                (TrendNutrient::Sugar, -50, Trend::Down),
            ]
        );
        assert!(wrapped.nutrient_trends.iter().all(|t| t.is_good));

        assert_eq!(
            wrapped.achievements,
            [
                Achievement::NutritionExpert,
                Achievement::FiberBoost,
                Achievement::SodiumReducer,
            ]
        );
        // 3 + 6.22 + 30
        assert_eq!(wrapped.health_score, 39);
    }

    #[test]
    fn wrapped_without_history_has_no_trends() {
        let prata = nutrition(500.0, 10.0, 600.0, 2.0, 3.0);
        let current = [intake(jan(2), &[("Roti Prata", prata, 45)])];

        let wrapped = monthly_wrapped(2025, 1, &current, &[]).unwrap();

        assert!(wrapped.nutrient_trends.is_empty());
        assert!(wrapped.achievements.is_empty());
        assert_eq!(wrapped.health_score, 2);
    }

    #[test]
    fn top_meals_are_capped() {
        let n = nutrition(400.0, 20.0, 400.0, 3.0, 3.0);
        let meals: Vec<(String, Nutrition, u32)> =
            (0..8).map(|i| (format!("Dish {i}"), n, 10 * i)).collect();
        let refs: Vec<(&str, Nutrition, u32)> =
            meals.iter().map(|(name, n, p)| (name.as_str(), *n, *p)).collect();

        let wrapped = monthly_wrapped(2025, 1, &[intake(jan(5), &refs)], &[]).unwrap();

        assert_eq!(wrapped.top_meals.len(), 5);
        assert_eq!(wrapped.top_meals[0].name, "Dish 7");
        assert_eq!(wrapped.top_meals[0].avg_points, 70);
    }
}
