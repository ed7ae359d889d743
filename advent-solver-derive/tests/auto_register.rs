use advent_solver::{
    InputParser, ParseError, Part, RegisterSolution, RegistryBuilder, Solution, SolveError,
    SolutionPlugin,
};

#[derive(Solution, RegisterSolution)]
#[solution(parts = 2)]
#[puzzle(year = 2023, day = 7, tags = ["test", "arithmetic"])]
struct Tagged;

impl InputParser for Tagged {
    type Input<'a> = Vec<i64>;

    fn parse(raw: &str) -> Result<Self::Input<'_>, ParseError> {
        raw.lines().map(|line| Ok(line.trim().parse()?)).collect()
    }
}

impl Part<1> for Tagged {
    fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
        Ok(input.iter().sum::<i64>().to_string())
    }
}

impl Part<2> for Tagged {
    fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
        Ok(input.iter().product::<i64>().to_string())
    }
}

#[derive(Solution, RegisterSolution)]
#[solution(parts = 1)]
#[puzzle(year = 2023, day = 8)]
struct Untagged;

impl InputParser for Untagged {
    type Input<'a> = usize;

    fn parse(raw: &str) -> Result<Self::Input<'_>, ParseError> {
        Ok(raw.lines().count())
    }
}

impl Part<1> for Untagged {
    fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
        Ok(input.to_string())
    }
}

#[test]
fn test_derived_plugins_are_discovered() {
    let registry = RegistryBuilder::new()
        .register_all_plugins()
        .expect("plugin registration failed")
        .build();

    assert!(registry.contains(2023, 7));
    assert!(registry.contains(2023, 8));

    let mut solution = registry.create(2023, 7, "2\n3\n4").unwrap();
    assert_eq!(solution.run(1).unwrap().answer, "9");
    assert_eq!(solution.run(2).unwrap().answer, "24");
}

#[test]
fn test_plugin_metadata_matches_derive_attributes() {
    let registry = RegistryBuilder::new()
        .register_all_plugins()
        .unwrap()
        .build();

    let info = registry.info(2023, 7).unwrap();
    assert_eq!((info.year, info.day, info.parts), (2023, 7, 2));
    let info = registry.info(2023, 8).unwrap();
    assert_eq!((info.year, info.day, info.parts), (2023, 8, 1));
}

#[test]
fn test_tag_filter_selects_matching_plugins() {
    let registry = RegistryBuilder::new()
        .register_plugins(|plugin| plugin.tags.contains(&"arithmetic"))
        .unwrap()
        .build();

    assert!(registry.contains(2023, 7));
    assert!(!registry.contains(2023, 8));
}

#[test]
fn test_year_day_filter_selects_single_plugin() {
    let registry = RegistryBuilder::new()
        .register_plugins(|plugin| plugin.year == 2023 && plugin.day == 8)
        .unwrap()
        .build();

    assert_eq!(registry.len(), 1);
    let mut solution = registry.create(2023, 8, "a\nb\nc").unwrap();
    assert_eq!(solution.run(1).unwrap().answer, "3");
}

#[test]
fn test_submitted_plugins_carry_tags() {
    let tagged = advent_solver::inventory::iter::<SolutionPlugin>()
        .find(|plugin| plugin.year == 2023 && plugin.day == 7)
        .expect("tagged plugin not submitted");
    assert_eq!(tagged.tags, &["test", "arithmetic"]);

    let untagged = advent_solver::inventory::iter::<SolutionPlugin>()
        .find(|plugin| plugin.year == 2023 && plugin.day == 8)
        .expect("untagged plugin not submitted");
    assert!(untagged.tags.is_empty());
}
