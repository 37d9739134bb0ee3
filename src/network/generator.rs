//! Synthetic members and interactions for exercising the network.

use indicatif::ProgressBar;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::network::error::NetworkError;
use crate::network::graph::SocialNetwork;
use crate::network::utils::get_pb;

pub const FIRST_NAMES: [&str; 10] = [
    "John",
    "Aliki",
    "Menelaos",
    "Emmanouela",
    "Kiriaki",
    "Olivia",
    "George",
    "Sophia",
    "William",
    "Emily",
];

pub const LAST_NAMES: [&str; 10] = [
    "Smithers",
    "Huancan",
    "Berolm",
    "Onion",
    "Papadopoulos",
    "Mariliou",
    "Dafnontas",
    "Garcia",
    "Rodriguez",
    "Wilson",
];

#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Names drawn. Repeated names collapse onto one member.
    pub members: usize,
    pub interactions: usize,
    /// Fixed seed for reproducible networks. `None` seeds from the OS.
    pub seed: Option<u64>,
    pub max_likes: u32,
    pub max_comments: u32,
    pub first_names: Vec<String>,
    pub last_names: Vec<String>,
    pub show_progress: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            members: 10,
            interactions: 100,
            seed: None,
            max_likes: 100,
            max_comments: 50,
            first_names: FIRST_NAMES.iter().map(ToString::to_string).collect(),
            last_names: LAST_NAMES.iter().map(ToString::to_string).collect(),
            show_progress: false,
        }
    }
}

impl GeneratorConfig {
    #[must_use]
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    fn random_name<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<String, NetworkError> {
        let first = self.first_names.choose(rng).ok_or(NetworkError::EmptyNamePool)?;
        let last = self.last_names.choose(rng).ok_or(NetworkError::EmptyNamePool)?;
        Ok(format!("{first} {last}"))
    }
}

/// Adds `config.members` random "First Last" members, then records
/// `config.interactions` random interactions between them.
///
/// Returns the drawn names in draw order, duplicates included.
pub fn generate_random_data<R: Rng + ?Sized>(
    network: &mut SocialNetwork<String>,
    config: &GeneratorConfig,
    rng: &mut R,
) -> Result<Vec<String>, NetworkError> {
    let names = (0..config.members)
        .map(|_| config.random_name(rng))
        .collect::<Result<Vec<_>, _>>()?;

    for name in &names {
        network.add_member(name.clone());
    }

    if names.is_empty() {
        return Ok(names);
    }

    let pb = if config.show_progress {
        get_pb(config.interactions as u64, "Generating interactions")
    } else {
        ProgressBar::hidden()
    };

    for _ in 0..config.interactions {
        let (Some(from), Some(to)) = (names.choose(rng), names.choose(rng)) else {
            break;
        };
        let likes = i64::from(rng.gen_range(0..=config.max_likes));
        let comments = i64::from(rng.gen_range(0..=config.max_comments));
        network.record_interaction(from.clone(), to.clone(), likes, comments);
        pb.inc(1);
    }
    pb.finish_and_clear();

    tracing::debug!(
        drawn = names.len(),
        members = network.len(),
        interactions = config.interactions,
        "generated random network"
    );

    Ok(names)
}
