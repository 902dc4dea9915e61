/// Geographic scope of an indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    /// Fortaleza, the state capital
    City,
    /// Ceará
    State,
    /// Brazil
    Country,
}

impl Region {
    /// Full display name, as used in the mortality chart and the region cards.
    pub fn label(&self) -> &'static str {
        match self {
            Region::City => "Fortaleza - CE",
            Region::State => "Ceará",
            Region::Country => "Brasil",
        }
    }

    /// Compact name used in the live-births legend.
    pub fn short_label(&self) -> &'static str {
        match self {
            Region::City => "Fortaleza - CE",
            Region::State => "CE",
            Region::Country => "Brasil",
        }
    }

    /// One-line description shown under the region card heading.
    pub fn caption(&self) -> &'static str {
        match self {
            Region::City => "Dados da capital",
            Region::State => "Dados do estado",
            Region::Country => "Dados nacionais",
        }
    }

    /// Regions from the smallest scope to the largest.
    pub fn all() -> &'static [Region] {
        &[Region::City, Region::State, Region::Country]
    }
}

/// Race/colour categories reported in the infant mortality statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RaceCategory {
    Branca,
    Preta,
    Amarela,
    Parda,
    Indigena,
    Ignorada,
}

impl RaceCategory {
    pub fn label(&self) -> &'static str {
        match self {
            RaceCategory::Branca => "Branca",
            RaceCategory::Preta => "Preta",
            RaceCategory::Amarela => "Amarela",
            RaceCategory::Parda => "Parda",
            RaceCategory::Indigena => "Indígena",
            RaceCategory::Ignorada => "Raça/cor ignorada",
        }
    }

    /// Categories in reporting order.
    pub fn all() -> &'static [RaceCategory] {
        &[
            RaceCategory::Branca,
            RaceCategory::Preta,
            RaceCategory::Amarela,
            RaceCategory::Parda,
            RaceCategory::Indigena,
            RaceCategory::Ignorada,
        ]
    }
}

/// Indicator groups that make up the nursery need index (INC).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndicatorGroup {
    Poverty,
    SingleParent,
    WorkingCaregivers,
    Disability,
}

impl IndicatorGroup {
    pub fn label(&self) -> &'static str {
        match self {
            IndicatorGroup::Poverty => "Crianças em situação de pobreza",
            IndicatorGroup::SingleParent => "Crianças de famílias monoparentais",
            IndicatorGroup::WorkingCaregivers => {
                "Crianças com mães/cuidadores economicamente ativos"
            }
            IndicatorGroup::Disability => "Crianças com deficiência",
        }
    }
}

/// Yearly live-birth counts for one region, ordered by year.
#[derive(Debug, Clone, PartialEq)]
pub struct YearSeries {
    pub region: Region,
    points: Vec<(i32, i64)>,
}

impl YearSeries {
    pub fn new(region: Region, years: &[i32], values: &[i64]) -> Self {
        let points = years.iter().copied().zip(values.iter().copied()).collect();
        Self { region, points }
    }

    pub fn points(&self) -> &[(i32, i64)] {
        &self.points
    }

    pub fn years(&self) -> Vec<i32> {
        self.points.iter().map(|(year, _)| *year).collect()
    }

    pub fn values(&self) -> Vec<i64> {
        self.points.iter().map(|(_, value)| *value).collect()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Share of infant deaths per race/colour category, per region.
///
/// Each region's figures are independent statistics and do not sum to 100.
#[derive(Debug, Clone, PartialEq)]
pub struct MortalityBreakdown {
    rows: Vec<(Region, Vec<(RaceCategory, f64)>)>,
}

impl MortalityBreakdown {
    pub fn new(rows: Vec<(Region, Vec<(RaceCategory, f64)>)>) -> Self {
        Self { rows }
    }

    /// Categories recorded for a region, in insertion order.
    pub fn categories(&self, region: Region) -> &[(RaceCategory, f64)] {
        self.rows
            .iter()
            .find(|(r, _)| *r == region)
            .map(|(_, values)| values.as_slice())
            .unwrap_or_default()
    }

    /// Percentage for one cell of the table, zero when the cell is absent.
    pub fn percentage(&self, region: Region, category: RaceCategory) -> f64 {
        self.categories(region)
            .iter()
            .find(|(c, _)| *c == category)
            .map_or(0.0, |(_, value)| *value)
    }

    pub fn regions(&self) -> impl Iterator<Item = Region> + '_ {
        self.rows.iter().map(|(region, _)| *region)
    }
}

/// Percentages of the INC indicator groups, kept in insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexBreakdown {
    entries: Vec<(IndicatorGroup, f64)>,
}

impl IndexBreakdown {
    pub fn new(entries: Vec<(IndicatorGroup, f64)>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[(IndicatorGroup, f64)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Everything the dashboard displays. Built once at startup and read-only afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub years: Vec<i32>,
    pub births: Vec<YearSeries>,
    pub mortality: MortalityBreakdown,
    pub index: IndexBreakdown,
}

impl Dataset {
    /// Live-births series of a region.
    pub fn series(&self, region: Region) -> Option<&YearSeries> {
        self.births.iter().find(|s| s.region == region)
    }
}
