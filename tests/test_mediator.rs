use genetic_mediator::{
    evaluation::Evaluator,
    evolution::{EvolutionOptions, MediatorBuilder, Termination},
    individual::Individual,
    numeric::{self, AtLeastThreshold, MatchingBits, Number, UniformCrossover},
    population::StagnationRule,
};

fn four_bit_options() -> EvolutionOptions {
    EvolutionOptions::builder()
        .individuals_per_generation(20)
        .max_duration_minutes(10)
        .stagnation_rule(StagnationRule::Literal)
        .build()
        .unwrap()
}

#[test]
fn test_run_finds_four_bit_target() {
    let mut mediator = MediatorBuilder::new()
        .with_options(four_bit_options())
        .with_individual_factory(numeric::number_factory(4))
        .with_evaluator(Evaluator::new(|| String::from("1010"), MatchingBits))
        .with_selection_rule(AtLeastThreshold)
        .with_recombiner(UniformCrossover::new(0.1))
        .build()
        .unwrap();

    let report = mediator.run();

    assert_eq!(report.termination, Termination::SolutionFound);
    assert!(mediator.current_generation().contains_solution());
    assert_eq!(report.best_score, Some(4));

    let best = mediator.current_generation().best().unwrap();
    assert_eq!(best.value(), "1010");
    assert!(best.is_solution());
}

#[test]
fn test_every_generation_keeps_its_size() {
    let options = EvolutionOptions::builder()
        .individuals_per_generation(9)
        .max_duration_minutes(10)
        .stagnation_rule(StagnationRule::Literal)
        .retain_history(true)
        .build()
        .unwrap();

    let mut mediator = MediatorBuilder::new()
        .with_options(options)
        .with_individual_factory(numeric::number_factory(12))
        .with_evaluator(Evaluator::new(numeric::target_factory(12), MatchingBits))
        .with_selection_rule(AtLeastThreshold)
        .with_recombiner(UniformCrossover::new(0.05))
        .build()
        .unwrap();

    mediator.run();

    assert_eq!(mediator.current_generation().len(), 9);
    assert!(mediator
        .current_generation()
        .individuals()
        .iter()
        .all(|i| i.is_evaluated()));

    // Archived parents are the survivors of elimination, all selected.
    for generation in mediator.population().generations() {
        assert!(generation.len() <= 9);
        assert!(generation.individuals().iter().all(|i| i.is_selected()));
    }
    assert_eq!(
        mediator.population().census_entries().len() as u32,
        mediator.current_generation().number()
    );
}

#[test]
fn test_children_are_marked() {
    let mut mediator = MediatorBuilder::new()
        .with_options(four_bit_options())
        .with_individual_factory(|| Number::new("0000"))
        .with_evaluator(Evaluator::new(|| String::from("0011"), MatchingBits))
        .with_selection_rule(AtLeastThreshold)
        .with_recombiner(UniformCrossover::new(0.2))
        .build()
        .unwrap();

    let report = mediator.run();

    assert_eq!(report.termination, Termination::SolutionFound);
    assert!(report.generation >= 1);
    // Seeds are all "0000", so the solution can only come from crossover.
    let solution = mediator
        .current_generation()
        .individuals()
        .iter()
        .find(|i| i.is_solution())
        .unwrap();
    assert!(solution.is_child());
}

#[test]
fn test_report_serializes() {
    let mut mediator = MediatorBuilder::new()
        .with_options(four_bit_options())
        .with_individual_factory(|| Number::new("1111"))
        .with_evaluator(Evaluator::new(|| String::from("1111"), MatchingBits))
        .with_selection_rule(AtLeastThreshold)
        .with_recombiner(UniformCrossover::default())
        .build()
        .unwrap();

    let report = mediator.run();
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["termination"], "solution_found");
    assert_eq!(json["generation"], 0);
    assert_eq!(json["best_score"], 4);
    assert_eq!(json["decreasing"], false);
}
