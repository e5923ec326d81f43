use genetic_mediator::{
    generation::Generation,
    individual::Individual,
    numeric::Number,
    population::{Population, StagnationRule},
};

fn generation_totalling(number: u32, total: i32) -> Generation<Number> {
    let mut generation = Generation::new(number);
    let mut member = Number::new("0");
    member.set_score(total);
    generation.push(member);
    generation
}

fn census_of(rule: StagnationRule, totals: &[i32]) -> Population<Number> {
    let mut population = Population::with_rule(rule);
    for (index, &total) in totals.iter().enumerate() {
        population.census(&generation_totalling(index as u32 + 1, total));
    }
    population
}

const STRICTLY_DECREASING: [i32; 11] = [100, 90, 80, 70, 60, 50, 40, 30, 20, 10, 0];

#[test]
fn test_literal_rule_on_strict_decline() {
    // Position 1 is compared with itself first, so the literal rule cannot fire.
    let population = census_of(StagnationRule::Literal, &STRICTLY_DECREASING);
    assert!(!population.is_decreasing());
}

#[test]
fn test_consecutive_decline_rule_on_strict_decline() {
    let population = census_of(StagnationRule::ConsecutiveDecline, &STRICTLY_DECREASING);
    assert!(population.is_decreasing());
}

#[test]
fn test_engine_follows_consecutive_decline_by_default() {
    let mut population: Population<Number> = Population::default();
    for (index, &total) in STRICTLY_DECREASING.iter().enumerate() {
        population.census(&generation_totalling(index as u32 + 1, total));
    }
    assert_eq!(population.rule(), StagnationRule::ConsecutiveDecline);
    assert!(population.is_decreasing());
}

#[test]
fn test_census_overwrites_same_generation() {
    let mut population: Population<Number> = Population::new();
    population.census(&generation_totalling(1, 5));
    population.census(&generation_totalling(1, 8));
    assert_eq!(population.census_entries().len(), 1);
    assert_eq!(population.census_entries()[&1], 8);
}
