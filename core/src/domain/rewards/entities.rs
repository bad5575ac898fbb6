use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::dish_catalog::entities::Nutrition;

pub const BALANCED_MEAL_POINTS: u32 = 50;
pub const HIGH_FIBER_GRAMS: f64 = 5.0;
pub const HIGH_PROTEIN_GRAMS: f64 = 20.0;
/// Older points entries are dropped past this many.
pub const POINTS_HISTORY_LIMIT: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BadgeKind {
    FirstMeal,
    WeekStreak,
    BalancedEater,
    FiberFan,
    ProteinPro,
    CenturyClub,
    HealthChampion,
}

impl BadgeKind {
    pub const ALL: [BadgeKind; 7] = [
        BadgeKind::FirstMeal,
        BadgeKind::WeekStreak,
        BadgeKind::BalancedEater,
        BadgeKind::FiberFan,
        BadgeKind::ProteinPro,
        BadgeKind::CenturyClub,
        BadgeKind::HealthChampion,
    ];

    pub fn target(&self) -> u32 {
        match self {
            BadgeKind::FirstMeal => 1,
            BadgeKind::WeekStreak => 7,
            BadgeKind::BalancedEater => 1,
            BadgeKind::FiberFan => 10,
            BadgeKind::ProteinPro => 10,
            BadgeKind::CenturyClub => 100,
            BadgeKind::HealthChampion => 500,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            BadgeKind::FirstMeal => "First Steps",
            BadgeKind::WeekStreak => "Week Warrior",
            BadgeKind::BalancedEater => "Balanced Eater",
            BadgeKind::FiberFan => "Fiber Fan",
            BadgeKind::ProteinPro => "Protein Pro",
            BadgeKind::CenturyClub => "Century Club",
            BadgeKind::HealthChampion => "Health Champion",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Badge {
    pub kind: BadgeKind,
    pub progress: u32,
    pub target: u32,
    pub unlocked_at: Option<DateTime<Utc>>,
}

impl Badge {
    pub fn new(kind: BadgeKind) -> Self {
        Self {
            kind,
            progress: 0,
            target: kind.target(),
            unlocked_at: None,
        }
    }

    pub fn is_unlocked(&self) -> bool {
        self.unlocked_at.is_some()
    }

    /// Raises progress to `value` (capped at target, never lowered). Returns
    /// true when this call unlocked the badge.
    fn advance_to(&mut self, value: u32, now: DateTime<Utc>) -> bool {
        self.progress = self.progress.max(value.min(self.target));
        if self.progress >= self.target && self.unlocked_at.is_none() {
            self.unlocked_at = Some(now);
            return true;
        }
        false
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointsEntry {
    pub date: NaiveDate,
    pub points: u32,
    pub meal_name: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RewardsState {
    pub total_points: u32,
    pub current_streak: u32,
    pub longest_streak: u32,
    pub last_log_date: Option<NaiveDate>,
    pub meals_logged: u32,
    pub badges: Vec<Badge>,
    /// Newest first.
    pub points_history: Vec<PointsEntry>,
}

impl Default for RewardsState {
    fn default() -> Self {
        Self {
            total_points: 0,
            current_streak: 0,
            longest_streak: 0,
            last_log_date: None,
            meals_logged: 0,
            badges: BadgeKind::ALL.into_iter().map(Badge::new).collect(),
            points_history: Vec::new(),
        }
    }
}

impl RewardsState {
    pub fn badge(&self, kind: BadgeKind) -> Option<&Badge> {
        self.badges.iter().find(|b| b.kind == kind)
    }

    pub fn unlocked_badges(&self) -> impl Iterator<Item = &Badge> {
        self.badges.iter().filter(|b| b.is_unlocked())
    }

    /// Same day keeps the streak, the next day extends it, any gap restarts it.
    /// Dates before the last logged day are ignored.
    pub fn update_streak(&mut self, date: NaiveDate) {
        match self.last_log_date {
            Some(last) if date <= last => return,
            Some(last) if last.succ_opt() == Some(date) => self.current_streak += 1,
            _ => self.current_streak = 1,
        }
        self.last_log_date = Some(date);
        self.longest_streak = self.longest_streak.max(self.current_streak);
    }

    /// Applies one logged meal and returns the badges it unlocked.
    pub fn record_meal(
        &mut self,
        meal_name: &str,
        nutrition: &Nutrition,
        points: u32,
        reason: &str,
        date: NaiveDate,
        now: DateTime<Utc>,
    ) -> Vec<BadgeKind> {
        self.update_streak(date);
        self.total_points = self.total_points.saturating_add(points);
        self.meals_logged = self.meals_logged.saturating_add(1);
        self.points_history.insert(
            0,
            PointsEntry {
                date,
                points,
                meal_name: meal_name.to_string(),
                reason: reason.to_string(),
            },
        );
        self.points_history.truncate(POINTS_HISTORY_LIMIT);

        // Older stored states may lack newer badges.
        for kind in BadgeKind::ALL {
            if self.badge(kind).is_none() {
                self.badges.push(Badge::new(kind));
            }
        }

        let mut unlocked = Vec::new();
        for badge in &mut self.badges {
            let value = match badge.kind {
                BadgeKind::FirstMeal => Some(self.meals_logged),
                BadgeKind::WeekStreak => Some(self.current_streak),
                BadgeKind::CenturyClub | BadgeKind::HealthChampion => Some(self.total_points),
                BadgeKind::BalancedEater => {
                    (points >= BALANCED_MEAL_POINTS).then_some(badge.progress + 1)
                }
                BadgeKind::FiberFan => {
                    (nutrition.fiber >= HIGH_FIBER_GRAMS).then_some(badge.progress + 1)
                }
                BadgeKind::ProteinPro => {
                    (nutrition.protein >= HIGH_PROTEIN_GRAMS).then_some(badge.progress + 1)
                }
            };

            if let Some(value) = value {
                if badge.advance_to(value, now) {
                    unlocked.push(badge.kind);
                }
            }
        }

        unlocked
    }
}
