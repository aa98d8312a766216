use route_coverage::{Point, Scenario};
use std::io::{self, Write};

/// Writes the budget, cost and size of the Route, its coordinates and the time it took.
pub fn write_scenario(
    out: &mut impl Write,
    points: &[Point],
    scenario: &Scenario,
) -> io::Result<()> {
    let route = &scenario.route;
    writeln!(
        out,
        "{:.0} {:.1} ({} points)",
        scenario.budget,
        route.cost(),
        route.len()
    )?;
    for point in route.coordinates(points) {
        write!(out, "{:.0} {:.0}\t", point.x, point.y)?;
    }
    write!(out, "\n{:.5} seconds\n\n", scenario.elapsed.as_secs_f64())
}

#[cfg(test)]
mod tests {
    use super::*;
    use route_coverage::Route;
    use std::time::Duration;

    #[test]
    fn format() {
        let points = [Point::new(0.0, 0.0), Point::new(3.0, 4.0)];
        let scenario = Scenario {
            budget: 29.0,
            route: Route::new(vec![0, 1], 5.0),
            elapsed: Duration::from_millis(1500),
        };
        let mut out = Vec::new();
        write_scenario(&mut out, &points, &scenario).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "29 5.0 (2 points)\n0 0\t3 4\t\n1.50000 seconds\n\n"
        );
    }

    #[test]
    fn no_route() {
        let scenario = Scenario {
            budget: 1.0,
            route: Route::none(),
            elapsed: Duration::ZERO,
        };
        let mut out = Vec::new();
        write_scenario(&mut out, &[], &scenario).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "1 inf (0 points)\n\n0.00000 seconds\n\n"
        );
    }
}
