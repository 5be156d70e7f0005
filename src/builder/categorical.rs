// Categorical routines: monthly temperature figures with labeled set axes
//
// The "nix.catergorical" type tags reproduce the recorded fixture
// verbatim, misspelling included.

use log::debug;

use crate::error::VaultError;
use crate::model::{Block, DataArray, Dimension, Section, Source};

const MONTHLY_AVG: [f64; 12] = [
    13.7, 16.3, 14.6, 11.6, 8.6, 5.7, 4.0, 2.6, 3.0, 4.0, 8.5, 13.1,
];
const MONTHLY_MIN: [f64; 12] = [
    12.3, 13.8, 12.1, 9.9, 6.6, 1.4, 1.5, -0.2, -1.5, -1.4, 0.5, 9.4,
];
const MONTHLY_MAX: [f64; 12] = [
    18.7, 23.6, 25.9, 20.0, 16.6, 11.7, 9.5, 7.2, 9.8, 10.5, 15.8, 18.8,
];
const MONTH_LABELS: [&str; 12] = [
    "Sep", "Aug", "Jul", "Jun", "Mai", "April", "Mar", "Feb", "Jan", "Dec", "Nov", "Okt",
];
const STATISTIC_LABELS: [&str; 3] = ["Min", "Avg", "Max"];

fn labels(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|label| label.to_string()).collect()
}

/// Store the 1-D average temperatures with month labels and create the
/// shared weather source with its origin metadata. Returns the source
/// name for reuse by the 2-D routine.
pub fn monthly_temperatures(
    block: &mut Block,
    sections: &mut Vec<Section>,
) -> Result<String, VaultError> {
    let temperatures = DataArray::vector(
        "average temperature",
        "nix.catergorical",
        MONTHLY_AVG.to_vec(),
    )
    .with_definition(
        "1-D categorical data can also be stored in a DataArray entity. The \
         dimension descriptor is in this case a SetDimension. The labels stored in \
         this dimension are used to label the ticks of the x-axis.",
    )
    .with_label("temperature")
    .with_unit("C")
    .with_dimension(Dimension::set(labels(&MONTH_LABELS)))
    .with_source("Data source");
    block.data_arrays.push(temperatures);

    sections.push(
        Section::new("Helgoland Weather data", "data_origin")
            .with_property("period", "201509 - 201410")
            .with_property(
                "url",
                "http://www.dwd.de/DE/leistungen/klimadatendeutschland/klimadatendeutschland.html",
            ),
    );
    block.sources.push(
        Source::new("Data source", "nix.source").with_metadata("Helgoland Weather data"),
    );
    debug!("[Builder] Stored 1-D temperatures with shared weather source");

    Ok("Data source".to_string())
}

/// Store the min/avg/max temperature matrix with labeled set axes on both
/// dimensions, linked to the shared weather source.
pub fn temperature_matrix(block: &mut Block, source: &str) -> Result<(), VaultError> {
    if block.source(source).is_none() {
        return Err(VaultError::MissingEntity {
            kind: "source",
            name: source.to_string(),
        });
    }

    let mut values = Vec::with_capacity(3 * 12);
    values.extend_from_slice(&MONTHLY_MIN);
    values.extend_from_slice(&MONTHLY_AVG);
    values.extend_from_slice(&MONTHLY_MAX);

    let matrix = DataArray::from_doubles(
        "2D set of temperatures",
        "nix.catergorical.series",
        vec![3, 12],
        values,
    )
    .with_label("temperature")
    .with_unit("C")
    .with_dimension(Dimension::set(labels(&STATISTIC_LABELS)))
    .with_dimension(Dimension::set(labels(&MONTH_LABELS)))
    .with_source(source);
    block.data_arrays.push(matrix);

    Ok(())
}
