use warehouse_router::models::RouteComparison;
use warehouse_router::utils::generator::{generate_warehouse, GeneratorConfig};
use warehouse_router::utils::{plot, report};
use warehouse_router::{baseline_route, greedy_route};

fn main() {
    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse::<u64>().ok())
        .unwrap_or(42);

    let config = GeneratorConfig::default();
    println!(
        "Generating {}x{} warehouse ({} shelves, {} items, seed {})...",
        config.width, config.height, config.num_shelves, config.num_items, seed
    );

    let (warehouse, pick_list) = match generate_warehouse(&config, seed) {
        Ok(data) => data,
        Err(e) => {
            eprintln!("Error generating warehouse: {}", e);
            return;
        }
    };

    println!("\nPick list ({} items):", pick_list.len());
    for item in &pick_list {
        if let Some(cell) = warehouse.item_location(item) {
            println!("  {} at shelf ({}, {})", item, cell.x, cell.y);
        }
    }

    let start = warehouse.packing_station;
    let baseline = match baseline_route(&pick_list, &warehouse.item_locations, start) {
        Ok(route) => route,
        Err(e) => {
            eprintln!("Error computing baseline route: {}", e);
            return;
        }
    };
    let optimized = match greedy_route(&pick_list, &warehouse.item_locations, start) {
        Ok(route) => route,
        Err(e) => {
            eprintln!("Error computing optimized route: {}", e);
            return;
        }
    };

    println!("\nBaseline Distance: {} units", baseline.total_distance);
    println!("Optimized Distance: {} units", optimized.total_distance);

    let comparison = RouteComparison::new(baseline, optimized);
    println!("Improvement: {:.2}%", comparison.improvement_percent());

    println!("\n{}", report::render_table(&comparison));

    if let Err(e) = report::write_json(&comparison, "route_comparison.json") {
        eprintln!("Failed to write report: {}", e);
    } else {
        println!("Report saved to route_comparison.json");
    }

    if let Err(e) = plot::plot_warehouse("warehouse_plot.png", &warehouse, &comparison) {
        eprintln!("Failed to render plot: {}", e);
    } else {
        println!("Plot saved to warehouse_plot.png");
    }
}
