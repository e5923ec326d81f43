use genetic_mediator::{
    breeding::Crosser,
    generation::Generation,
    generator::Generator,
    individual::Individual,
    numeric::Number,
};

fn scored(label: &str, score: i32) -> Number {
    let mut number = Number::new(label);
    number.set_score(score);
    number
}

fn unmodified_pair(first: &Number, second: &Number) -> Vec<Number> {
    vec![first.clone(), second.clone()]
}

#[test]
fn test_crossing_pairs_sorted_parents() {
    let mut parents = Generation::new(0);
    for (label, score) in [("a", 10), ("b", 30), ("c", 20), ("d", 0)] {
        parents.push(scored(label, score));
    }

    let crosser = Crosser::new(unmodified_pair, 4).unwrap();
    let children = crosser.cross(&mut parents);

    assert_eq!(children.number(), 1);
    let labels: Vec<&str> = children
        .individuals()
        .iter()
        .map(|c| c.value().as_str())
        .collect();
    assert_eq!(labels, vec!["b", "c", "a", "d"]);
}

#[test]
fn test_crossing_stops_at_target_size() {
    let mut parents = Generation::new(5);
    for score in 0..10 {
        parents.push(scored(&format!("p{}", score), score));
    }

    for target in 1..=12 {
        let crosser = Crosser::new(unmodified_pair, target).unwrap();
        let children = crosser.cross(&mut parents.clone());
        // Whole pairs only: an odd target is rounded up to the next pair.
        let expected = (target + target % 2).min(10);
        assert_eq!(children.len(), expected, "target {}", target);
        assert_eq!(children.number(), 6);
    }
}

#[test]
fn test_replenishing_a_short_generation() {
    let mut parents = Generation::new(0);
    for (label, score) in [("x", 3), ("y", 2), ("z", 1)] {
        parents.push(scored(label, score));
    }

    let crosser = Crosser::new(unmodified_pair, 6).unwrap();
    let mut children = crosser.cross(&mut parents);
    assert_eq!(children.len(), 2);

    let generator = Generator::new(|| Number::new("fresh"));
    let fresh = generator.generation(6 - children.len());
    assert!(children.add_group(fresh.into_individuals().into_iter().map(Some)));

    assert_eq!(children.len(), 6);
    assert_eq!(children.number(), 1);
    assert_eq!(
        children
            .individuals()
            .iter()
            .filter(|c| c.value() == "fresh")
            .count(),
        4
    );
}
