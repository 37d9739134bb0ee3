use proptest::prelude::*;
use social_graph::network::graph::SocialNetwork;

const NAMES: [&str; 6] = ["ana", "ben", "cleo", "dev", "eli", "fay"];

fn interactions() -> impl Strategy<Value = Vec<(usize, usize, i64, i64)>> {
    prop::collection::vec((0..NAMES.len(), 0..NAMES.len(), 0..100_i64, 0..50_i64), 0..40)
}

fn build(steps: &[(usize, usize, i64, i64)]) -> SocialNetwork<&'static str> {
    let mut network = SocialNetwork::new();
    for &(from, to, likes, comments) in steps {
        network.record_interaction(NAMES[from], NAMES[to], likes, comments);
    }
    network
}

proptest! {
    #[test]
    fn follow_edges_are_symmetric(steps in interactions()) {
        let network = build(&steps);
        for &(from, to, _, _) in &steps {
            prop_assert!(network.member(&NAMES[from]).unwrap().following.contains(NAMES[to]));
            prop_assert!(network.member(&NAMES[to]).unwrap().followers.contains(NAMES[from]));
        }
        for member in network.members() {
            let state = network.member(&member).unwrap();
            for followed in &state.following {
                prop_assert!(network.member(followed).unwrap().followers.contains(member));
            }
            for follower in &state.followers {
                prop_assert!(network.member(follower).unwrap().following.contains(member));
            }
        }
    }

    #[test]
    fn last_interaction_wins(steps in interactions()) {
        let network = build(&steps);
        for &(from, to, _, _) in &steps {
            let (_, _, likes, comments) = steps
                .iter()
                .rev()
                .find(|(f, t, _, _)| *f == from && *t == to)
                .copied()
                .unwrap();
            let state = network.member(&NAMES[from]).unwrap();
            prop_assert_eq!(state.likes_given[&NAMES[to]], likes);
            prop_assert_eq!(state.comments_given[&NAMES[to]], comments);
        }
    }

    #[test]
    fn rates_cover_every_member(steps in interactions(), extra in 0..NAMES.len()) {
        let mut network = build(&steps);
        network.add_member(NAMES[extra]);
        let rates = network.all_engagement_rates();

        prop_assert_eq!(rates.keys().copied().collect::<Vec<_>>(), network.members());
        for (member, rate) in &rates {
            if network.member(member).unwrap().followers.is_empty() {
                prop_assert_eq!(*rate, 0.0);
                for other in NAMES {
                    if network.contains(&other) {
                        prop_assert_eq!(network.influence(member, &other).unwrap(), 0.0);
                    }
                }
            }
        }
    }

    #[test]
    fn paths_follow_edges(steps in interactions(), start in 0..NAMES.len(), end in 0..NAMES.len()) {
        let network = build(&steps);
        let (start, end) = (NAMES[start], NAMES[end]);

        let shortest = network.shortest_path(&start, &end);
        let highest = network.path_with_highest_engagement(&start, &end);

        for path in shortest.iter().chain(highest.iter()) {
            prop_assert_eq!(path.first(), Some(&start));
            prop_assert_eq!(path.last(), Some(&end));
            for hop in path.windows(2) {
                prop_assert!(network.member(&hop[0]).unwrap().follows(&hop[1]));
            }
        }

        if let Some(highest) = &highest {
            let shortest = shortest.as_ref().unwrap();
            prop_assert!(highest.len() >= shortest.len());
        }
        if network.contains(&start) && start == end {
            prop_assert_eq!(shortest, Some(vec![start]));
        }
    }

    #[test]
    fn add_member_is_idempotent(steps in interactions(), member in 0..NAMES.len()) {
        let mut once = build(&steps);
        once.add_member(NAMES[member]);
        let mut twice = once.clone();
        twice.add_member(NAMES[member]);

        prop_assert_eq!(once.members(), twice.members());
        prop_assert_eq!(once.member(&NAMES[member]), twice.member(&NAMES[member]));
    }
}
