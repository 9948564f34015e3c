use std::fmt::Display;
use std::fmt::Formatter;

use super::Problem;
use super::ProblemError;
use crate::core::constraints;
use crate::core::variables::VariableId;
use crate::Solver;
use crate::SolverOptions;

const NATIONALITIES: [&str; 5] = ["Norwegian", "Englishman", "Spaniard", "Ukrainian", "Japanese"];
const COLOURS: [&str; 5] = ["Blue", "Red", "Green", "Ivory", "Yellow"];
const DRINKS: [&str; 5] = ["Milk", "Coffee", "Tea", "Wine", "Orange Juice"];
const SMOKES: [&str; 5] = [
    "Kools",
    "Lucky Strike",
    "Old Gold",
    "Parliaments",
    "Chesterfields",
];
const PETS: [&str; 5] = ["Dog", "Snails", "Fox", "Horse", "Zebra"];

const CATEGORIES: [(&str, [&str; 5]); 5] = [
    ("Nationality", NATIONALITIES),
    ("Colour", COLOURS),
    ("Drink", DRINKS),
    ("Smoke", SMOKES),
    ("Pet", PETS),
];

const NUM_HOUSES: i32 = 5;

/// The zebra puzzle.
///
/// There are five houses, numbered 0 to 4 from left to right.
/// 1. The Englishman lives in the red house.
/// 2. The Spaniard owns the dog.
/// 3. Coffee is drunk in the green house.
/// 4. The Ukrainian drinks tea.
/// 5. The ivory house is immediately to the right of the green house.
/// 6. The Old Gold smoker owns snails.
/// 7. Kools are smoked in the yellow house.
/// 8. Milk is drunk in the middle house.
/// 9. The Norwegian lives in the first house.
/// 10. The man who smokes Chesterfields lives in the house next to the man with the fox.
/// 11. Kools are smoked in the house next to the house where the horse is kept.
/// 12. The Lucky Strike smoker drinks orange juice.
/// 13. The Japanese smokes Parliaments.
/// 14. The Norwegian lives next to the blue house.
///
/// Who owns the zebra?
///
/// Every attribute is a variable whose value is the house it belongs to.
#[derive(Debug)]
pub struct Einstein {
    solver: Solver,
}

impl Einstein {
    pub fn new() -> Result<Self, ProblemError> {
        Einstein::with_options(SolverOptions::default())
    }

    pub fn with_options(options: SolverOptions) -> Result<Self, ProblemError> {
        let mut solver = Solver::with_options(options);

        for (_, names) in CATEGORIES {
            let attributes =
                solver.new_named_variables(names.len(), 0..NUM_HOUSES, |i| names[i].to_owned());
            solver
                .add_constraint(constraints::all_different(attributes))
                .post()?;
        }

        let mut einstein = Einstein { solver };
        einstein.post_clues()?;
        Ok(einstein)
    }

    fn post_clues(&mut self) -> Result<(), ProblemError> {
        let same_house = [
            ("Englishman", "Red"),
            ("Spaniard", "Dog"),
            ("Coffee", "Green"),
            ("Ukrainian", "Tea"),
            ("Old Gold", "Snails"),
            ("Kools", "Yellow"),
            ("Lucky Strike", "Orange Juice"),
            ("Japanese", "Parliaments"),
        ];
        for (a, b) in same_house {
            let constraint = constraints::binary_equals(self.variable(a)?, self.variable(b)?);
            self.solver.add_constraint(constraint).post()?;
        }

        let next_to = [
            ("Chesterfields", "Fox"),
            ("Kools", "Horse"),
            ("Norwegian", "Blue"),
        ];
        for (a, b) in next_to {
            let constraint = constraints::adjacent(self.variable(a)?, self.variable(b)?);
            self.solver.add_constraint(constraint).post()?;
        }

        let constraint = constraints::offset(self.variable("Green")?, self.variable("Ivory")?, 1);
        self.solver.add_constraint(constraint).post()?;

        let milk = self.variable("Milk")?;
        self.solver.restrict_domain(milk, NUM_HOUSES / 2)?;
        let norwegian = self.variable("Norwegian")?;
        self.solver.restrict_domain(norwegian, 0)?;

        Ok(())
    }

    /// The variable of the attribute `name`.
    pub fn variable(&self, name: &str) -> Result<VariableId, ProblemError> {
        self.solver
            .variable_by_name(name)
            .ok_or_else(|| ProblemError::UnknownName(name.to_owned()))
    }

    /// The house of the attribute `name`, or [`None`] if no solution has been found.
    pub fn house_of(&self, name: &str) -> Result<Option<i32>, ProblemError> {
        Ok(self.solver.value(self.variable(name)?))
    }

    /// The attribute of `category` which belongs to `house`.
    fn attribute_in(&self, category: &[&'static str], house: i32) -> Option<&'static str> {
        category
            .iter()
            .copied()
            .find(|name| self.house_of(name).ok().flatten() == Some(house))
    }

    /// The nationality of the owner of the zebra, or [`None`] if no solution has been found.
    pub fn who_owns_zebra(&self) -> Option<&'static str> {
        let house = self.house_of("Zebra").ok().flatten()?;
        self.attribute_in(&NATIONALITIES, house)
    }
}

impl Problem for Einstein {
    fn name(&self) -> &str {
        "zebra puzzle"
    }

    fn solver(&self) -> &Solver {
        &self.solver
    }

    fn solver_mut(&mut self) -> &mut Solver {
        &mut self.solver
    }
}

impl Display for Einstein {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if !self.has_been_solved() {
            return writeln!(f, "{}: the problem has not been solved yet.", self.name());
        }
        if !self.has_found_solution() {
            return writeln!(f, "{}: no solution found.", self.name());
        }

        writeln!(f, "Found solution!")?;
        for house in 0..NUM_HOUSES {
            writeln!(f, "House #{house}")?;
            for (category, names) in CATEGORIES {
                let attribute = self.attribute_in(&names, house).unwrap_or("?");
                writeln!(f, "{category}: {attribute}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Einstein;
    use crate::problems::Problem;
    use crate::problems::ProblemError;

    #[test]
    fn questions_are_unanswered_before_solving() {
        let einstein = Einstein::new().expect("valid model");

        assert_eq!(None, einstein.who_owns_zebra());
        assert_eq!(Ok(None), einstein.house_of("Zebra"));
        assert!(einstein.to_string().contains("not been solved"));
    }

    #[test]
    fn unknown_attributes_are_rejected() {
        let einstein = Einstein::new().expect("valid model");

        assert_eq!(
            Err(ProblemError::UnknownName("Water".to_owned())),
            einstein.house_of("Water")
        );
    }

    #[test]
    fn every_house_is_rendered() {
        let mut einstein = Einstein::new().expect("valid model");
        let _ = einstein.solve().expect("solved once");

        let rendered = einstein.to_string();
        assert!(rendered.starts_with(
            "Found solution!\nHouse #0\nNationality: Norwegian\nColour: Yellow\nDrink: Wine\n"
        ));
        assert!(rendered.contains("House #3\nNationality: Japanese\nColour: Green\n"));
        assert_eq!(5, rendered.matches("House #").count());
        assert!(!rendered.contains('?'));
    }
}
