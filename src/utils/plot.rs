// Visualization of the warehouse grid and the two picking routes

use plotters::prelude::*;
use std::error::Error;

use crate::models::{GridPoint, RouteComparison, Warehouse};

const SHELF_COLOR: RGBColor = RGBColor(130, 130, 130);

/// Renders the warehouse and both routes to a PNG image
///
/// Shelves are drawn as filled cells, the packing station as a red marker,
/// the baseline route in blue and the optimized route in green. Routes are
/// drawn semi-transparent since they usually overlap on shared aisles.
pub fn plot_warehouse(
    output_path: &str,
    warehouse: &Warehouse,
    comparison: &RouteComparison,
) -> Result<(), Box<dyn Error>> {
    let root = BitMapBackend::new(output_path, (800, 800)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Warehouse Route Optimization", ("sans-serif", 20).into_font())
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(30)
        .build_cartesian_2d(
            -1.0..warehouse.width as f64,
            -1.0..warehouse.height as f64,
        )?;

    chart.configure_mesh().draw()?;

    // Shelf cells
    chart.draw_series(warehouse.shelves.iter().map(|cell| {
        let (x, y) = (cell.x as f64, cell.y as f64);
        Rectangle::new(
            [(x - 0.4, y - 0.4), (x + 0.4, y + 0.4)],
            ShapeStyle::from(&SHELF_COLOR).filled(),
        )
    }))?;

    // Packing station
    let station = warehouse.packing_station;
    chart
        .draw_series(std::iter::once(Circle::new(
            (station.x as f64, station.y as f64),
            8,
            ShapeStyle::from(&RED).filled(),
        )))?
        .label("Packing Station")
        .legend(|(x, y)| Circle::new((x, y), 8, ShapeStyle::from(&RED).filled()));

    // Baseline route
    chart
        .draw_series(LineSeries::new(
            route_points(&comparison.baseline.stops),
            BLUE.mix(0.6).stroke_width(2),
        ))?
        .label(format!(
            "Baseline Route ({} units)",
            comparison.baseline.total_distance
        ))
        .legend(|(x, y)| {
            PathElement::new(vec![(x, y), (x + 20, y)], BLUE.mix(0.6).stroke_width(2))
        });

    // Optimized route
    chart
        .draw_series(LineSeries::new(
            route_points(&comparison.optimized.stops),
            GREEN.mix(0.8).stroke_width(2),
        ))?
        .label(format!(
            "Optimized Route ({} units)",
            comparison.optimized.total_distance
        ))
        .legend(|(x, y)| {
            PathElement::new(vec![(x, y), (x + 20, y)], GREEN.mix(0.8).stroke_width(2))
        });

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .position(SeriesLabelPosition::UpperRight)
        .draw()?;

    root.present()?;

    Ok(())
}

fn route_points(stops: &[GridPoint]) -> Vec<(f64, f64)> {
    stops
        .iter()
        .map(|p| (p.x as f64, p.y as f64))
        .collect()
}
