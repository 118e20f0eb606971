use anyhow::Result;
use clap::{Parser, Subcommand};
use gridroute_cli::GridRouteClient;
use gridroute_core::{Cell, CellState, Grid, Mode, Scenario, ENTRY, EXIT, GRID_SIZE};

#[derive(Parser, Debug)]
#[command(author, version, about = "Drive a GridRoute server from the terminal", long_about = None)]
struct Args {
    /// GridRoute server URL
    #[arg(long, default_value = "http://localhost:5000")]
    url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Plan a route from the entry (or a given cell) to the exit
    Route {
        /// Traversal mode: shortest, safe, or fast
        #[arg(long, default_value = "shortest")]
        mode: String,
        /// Optional start x coordinate (requires --y)
        #[arg(long, requires = "y")]
        x: Option<i64>,
        /// Optional start y coordinate (requires --x)
        #[arg(long, requires = "x")]
        y: Option<i64>,
    },
    /// Flip one obstacle cell
    Toggle { x: i64, y: i64 },
    /// Replace the grid with a named layout: urban, dense, or open
    Scenario { name: String },
    /// Print the current grid
    Show,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let client = GridRouteClient::new(args.url);

    match args.command {
        Command::Route { mode, x, y } => {
            let mode: Mode = mode.parse()?;
            let current = match (x, y) {
                (Some(x), Some(y)) => {
                    let x = usize::try_from(x)?;
                    let y = usize::try_from(y)?;
                    Some(Cell::new(x, y))
                }
                _ => None,
            };
            let reply = client.plan_route(mode, current)?;
            match reply.route {
                Some(route) => {
                    println!("{} route found: {} cells ({} steps)", mode, route.len(), route.len() - 1);
                    println!("{}", render(&reply.grid, Some(&route)));
                }
                None => {
                    println!("No {} route to the exit", mode);
                    println!("{}", render(&reply.grid, None));
                }
            }
        }
        Command::Toggle { x, y } => {
            let reply = client.toggle(x, y)?;
            println!("Toggled ({}, {})", x, y);
            println!("{}", render(&reply.grid, None));
        }
        Command::Scenario { name } => {
            let scenario: Scenario = name.parse()?;
            let reply = client.apply_scenario(scenario)?;
            println!("Applied scenario '{}'", scenario);
            println!("{}", render(&reply.grid, None));
        }
        Command::Show => {
            let reply = client.grid()?;
            println!("{}", render(&reply.grid, None));
        }
    }

    Ok(())
}

/// Render the grid as ASCII: '#' blocked, '.' free, '*' route, S/E anchors.
fn render(grid: &Grid, route: Option<&[Cell]>) -> String {
    let mut output = String::with_capacity(GRID_SIZE * (GRID_SIZE * 2 + 1));
    for x in 0..GRID_SIZE {
        for y in 0..GRID_SIZE {
            let cell = Cell::new(x, y);
            let glyph = if cell == ENTRY {
                'S'
            } else if cell == EXIT {
                'E'
            } else if route.is_some_and(|route| route.contains(&cell)) {
                '*'
            } else if grid.get(x, y).ok() == Some(CellState::Blocked) {
                '#'
            } else {
                '.'
            };
            output.push(glyph);
            if y + 1 < GRID_SIZE {
                output.push(' ');
            }
        }
        output.push('\n');
    }
    output
}
