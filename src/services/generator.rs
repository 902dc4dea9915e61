use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::config::Config;
use crate::models::dataset::{
    Dataset, IndexBreakdown, IndicatorGroup, MortalityBreakdown, RaceCategory, Region, YearSeries,
};

/// Published live-birth counts for Fortaleza, 2010-2018
pub const CITY_BIRTHS: [i64; 9] = [36755, 37577, 38195, 39512, 37451, 35833, 32376, 29676, 28500];

const STATE_FACTOR: f64 = 0.8;
const STATE_NOISE: i64 = 2000;
const COUNTRY_FACTOR: f64 = 2.5;
const COUNTRY_NOISE: i64 = 5000;

/// Builds the synthetic dataset.
///
/// Deterministic for a given seed: the city series continues the published counts with
/// a decline of 500-1499 births a year (never below `Config::BIRTHS_FLOOR`), then the state
/// and country series are scaled from the city series with bounded noise, in that order.
pub fn generate(seed: u64) -> Dataset {
    let mut rng = StdRng::seed_from_u64(seed);

    let years: Vec<i32> = (Config::FIRST_YEAR..).take(Config::YEAR_COUNT).collect();

    let mut city = CITY_BIRTHS.to_vec();
    while city.len() < years.len() {
        let previous = city.last().copied().unwrap_or(Config::BIRTHS_FLOOR);
        let decline = rng.gen_range(500..1500);
        city.push((previous - decline).max(Config::BIRTHS_FLOOR));
    }
    city.truncate(years.len());

    let state: Vec<i64> = city
        .iter()
        .map(|&births| scale(births, STATE_FACTOR) + rng.gen_range(-STATE_NOISE..STATE_NOISE))
        .collect();

    let country: Vec<i64> = city
        .iter()
        .map(|&births| scale(births, COUNTRY_FACTOR) + rng.gen_range(-COUNTRY_NOISE..COUNTRY_NOISE))
        .collect();

    Dataset {
        births: vec![
            YearSeries::new(Region::City, &years, &city),
            YearSeries::new(Region::State, &years, &state),
            YearSeries::new(Region::Country, &years, &country),
        ],
        years,
        mortality: mortality_breakdown(),
        index: index_breakdown(),
    }
}

#[allow(clippy::cast_possible_truncation)]
fn scale(births: i64, factor: f64) -> i64 {
    (births as f64 * factor).round() as i64
}

/// Infant mortality by race/colour, 2023.
pub fn mortality_breakdown() -> MortalityBreakdown {
    use RaceCategory::{Amarela, Branca, Ignorada, Indigena, Parda, Preta};

    MortalityBreakdown::new(vec![
        (
            Region::Country,
            vec![
                (Branca, 38.06),
                (Preta, 3.28),
                (Amarela, 1.45),
                (Parda, 50.01),
                (Indigena, 2.39),
                (Ignorada, 6.11),
            ],
        ),
        (
            Region::State,
            vec![
                (Branca, 19.59),
                (Preta, 0.87),
                (Amarela, 1.45),
                (Parda, 66.44),
                (Indigena, 0.00),
                (Ignorada, 11.60),
            ],
        ),
        (
            Region::City,
            vec![
                (Branca, 20.81),
                (Preta, 0.87),
                (Amarela, 1.45),
                (Parda, 58.38),
                (Indigena, 0.00),
                (Ignorada, 18.50),
            ],
        ),
    ])
}

pub fn index_breakdown() -> IndexBreakdown {
    IndexBreakdown::new(vec![
        (IndicatorGroup::Poverty, 8.75),
        (IndicatorGroup::SingleParent, 4.26),
        (IndicatorGroup::WorkingCaregivers, 23.98),
        (IndicatorGroup::Disability, 2.00),
    ])
}
