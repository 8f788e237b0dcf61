use dioxus::document::eval;
use rand::Rng;
use rand::rng;

/// Upper bound (exclusive) for the per-bar animation delay.
const MAX_DELAY_MS: u16 = 500;

/// Kicks off the `.skill-bar` width animations, each after its own random
/// delay so the bars don't move in lockstep. Fire-and-forget: there is no
/// completion signal and bars may finish in any order.
pub fn animate_skill_bars(bar_count: usize) {
    if bar_count == 0 {
        return;
    }
    let delays = skill_bar_delays(bar_count, &mut rng());
    let _ = eval(&skill_bars_script(&delays));
}

/// Per-bar delays, sampled independently and uniformly from 0..500 ms.
fn skill_bar_delays<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<u16> {
    (0..count)
        .map(|_| rng.random_range(0..MAX_DELAY_MS))
        .collect()
}

fn skill_bars_script(delays: &[u16]) -> String {
    let delay_list = delays
        .iter()
        .map(u16::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        r#"
        (function() {{
            const delays = [{delay_list}];
            const bars = document.querySelectorAll(".skill-bar");
            bars.forEach((bar, index) => {{
                const width = bar.getAttribute("data-width");
                setTimeout(() => {{
                    bar.style.width = width;
                }}, delays[index % delays.length]);
            }});
        }})();
        "#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn delays_stay_below_the_cap() {
        let mut rng = StdRng::seed_from_u64(7);
        let delays = skill_bar_delays(64, &mut rng);
        assert_eq!(delays.len(), 64);
        assert!(delays.iter().all(|delay| *delay < MAX_DELAY_MS));
    }

    #[test]
    fn delays_are_sampled_independently() {
        let mut rng = StdRng::seed_from_u64(7);
        let delays = skill_bar_delays(32, &mut rng);
        assert!(delays.windows(2).any(|pair| pair[0] != pair[1]));
    }

    #[test]
    fn script_pairs_each_bar_with_its_delay() {
        let script = skill_bars_script(&[120, 301]);
        assert!(script.contains("[120, 301]"));
        assert!(script.contains(r#"querySelectorAll(".skill-bar")"#));
        assert!(script.contains(r#"getAttribute("data-width")"#));
    }
}
