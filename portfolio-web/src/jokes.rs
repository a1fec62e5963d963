use rand::Rng;

use crate::page::{MountPoint, Page};

/// Uniform pick; `None` only for an empty list.
pub fn pick<'a, R: Rng>(jokes: &'a [String], rng: &mut R) -> Option<&'a str> {
    if jokes.is_empty() {
        return None;
    }
    jokes.get(rng.random_range(0..jokes.len())).map(String::as_str)
}

/// Picks once and writes into the joke mount; no re-roll afterwards.
pub fn show<P: Page, R: Rng>(page: &P, jokes: &[String], rng: &mut R) -> Option<String> {
    if !page.exists(MountPoint::Joke) {
        return None;
    }
    let joke = pick(jokes, rng)?;
    page.set_text(MountPoint::Joke, joke).then(|| joke.to_string())
}

#[cfg(target_arch = "wasm32")]
pub fn browser_rng() -> rand::rngs::SmallRng {
    use rand::SeedableRng;
    let seed = (js_sys::Math::random() * u64::MAX as f64) as u64;
    rand::rngs::SmallRng::seed_from_u64(seed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::JOKES;
    use pretty_assertions::assert_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn jokes() -> Vec<String> {
        JOKES.iter().map(|j| j.to_string()).collect()
    }

    #[test]
    fn always_returns_a_list_member() {
        let jokes = jokes();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let joke = pick(&jokes, &mut rng).unwrap();
            assert!(jokes.iter().any(|j| j == joke));
        }
    }

    #[test]
    fn same_seed_same_joke() {
        let jokes = jokes();
        let first = pick(&jokes, &mut StdRng::seed_from_u64(7)).unwrap();
        let second = pick(&jokes, &mut StdRng::seed_from_u64(7)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn every_joke_is_reachable() {
        let jokes = jokes();
        let mut rng = StdRng::seed_from_u64(1);
        let mut seen = vec![false; jokes.len()];
        for _ in 0..2_000 {
            let joke = pick(&jokes, &mut rng).unwrap();
            let index = jokes.iter().position(|j| j == joke).unwrap();
            seen[index] = true;
        }
        assert!(seen.iter().all(|hit| *hit));
    }

    #[test]
    fn empty_list_yields_nothing() {
        assert_eq!(pick(&[], &mut StdRng::seed_from_u64(0)), None);
    }
}
