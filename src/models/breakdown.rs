use serde::{Deserialize, Serialize};

/// The five emission categories, in display order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Electricity,
    NaturalGas,
    CarTravel,
    Flights,
    DigitalDevices,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Self::Electricity,
        Self::NaturalGas,
        Self::CarTravel,
        Self::Flights,
        Self::DigitalDevices,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Electricity => "Electricity",
            Self::NaturalGas => "Natural Gas",
            Self::CarTravel => "Car Travel",
            Self::Flights => "Flights",
            Self::DigitalDevices => "Digital Devices",
        }
    }
}

/// Emissions attributed to a single category.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CategoryEmission {
    pub category: Category,
    pub co2_kg: f64,
    /// Share of the total, rounded to one decimal. Zero when the total is zero.
    pub percent: f64,
}

/// Result of one footprint calculation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FootprintBreakdown {
    /// One entry per [`Category`], in [`Category::ALL`] order.
    pub categories: Vec<CategoryEmission>,
    /// Sum of all categories, rounded to two decimals.
    pub total: f64,
    /// Total as a percentage of the global average, rounded to one decimal.
    pub percent_global: f64,
}

impl FootprintBreakdown {
    pub fn get(&self, category: Category) -> Option<&CategoryEmission> {
        self.categories.iter().find(|c| c.category == category)
    }

    /// Categories ordered by emissions, largest first. Ties keep display order.
    pub fn sorted_by_emissions(&self) -> Vec<CategoryEmission> {
        let mut sorted = self.categories.clone();
        sorted.sort_by(|a, b| b.co2_kg.total_cmp(&a.co2_kg));
        sorted
    }
}
