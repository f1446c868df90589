//! A base record, a derived record, and dynamic dispatch through a trait
//!
//! [`Employee`] embeds a [`Person`] and overrides [`Introduce::describe`].
//! Both types report construction and destruction to the console:
//! construction runs base then derived, and because `Employee::drop` runs
//! before its fields are dropped, destruction runs derived then base.

use std::rc::Rc;

use crate::console::Console;

pub trait Introduce {
    fn describe(&self) -> String;

    fn introduce(&self, console: &Console) {
        console.println(self.describe());
    }
}

pub struct Person {
    name: String,
    age: u32,
    console: Console,
}

impl Person {
    pub fn new(console: &Console, name: impl Into<String>, age: u32) -> Self {
        let name = name.into();
        console.println(format!("Person created: {}", name));
        Person {
            name,
            age,
            console: console.clone(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn set_age(&mut self, age: u32) {
        self.age = age;
    }
}

impl Introduce for Person {
    fn describe(&self) -> String {
        format!("Hi, I'm {} and I'm {} years old.", self.name, self.age)
    }
}

impl Drop for Person {
    fn drop(&mut self) {
        self.console
            .println(format!("Person destroyed: {}", self.name));
    }
}

pub struct Employee {
    person: Person,
    company: String,
}

impl Employee {
    pub fn new(
        console: &Console,
        name: impl Into<String>,
        age: u32,
        company: impl Into<String>,
    ) -> Self {
        let person = Person::new(console, name, age);
        let company = company.into();
        console.println(format!("Employee created at {}", company));
        Employee { person, company }
    }

    pub fn person(&self) -> &Person {
        &self.person
    }

    pub fn company(&self) -> &str {
        &self.company
    }
}

impl Introduce for Employee {
    fn describe(&self) -> String {
        format!(
            "Hi, I'm {}, {} years old, and I work at {}.",
            self.person().name(),
            self.person().age(),
            self.company()
        )
    }
}

impl Drop for Employee {
    fn drop(&mut self) {
        self.person
            .console
            .println(format!("Employee destroyed: {}", self.person.name()));
    }
}

pub fn demonstrate(console: &Console) {
    // Stack value, dropped at the end of this function
    let alice = Person::new(console, "Alice", 30);
    alice.introduce(console);

    // Heap value released explicitly
    let bob = Box::new(Person::new(console, "Bob", 25));
    bob.introduce(console);
    drop(bob);

    // Reference-counted value, released when the last handle goes
    let charlie = Rc::new(Person::new(console, "Charlie", 35));
    let second_handle = Rc::clone(&charlie);
    console.println(format!(
        "Handles to {}: {}",
        charlie.name(),
        Rc::strong_count(&charlie)
    ));
    drop(second_handle);
    charlie.introduce(console);

    let dave = Employee::new(console, "Dave", 40, "Acme Inc");
    let base: &dyn Introduce = &dave;
    base.introduce(console);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_through_trait_object() {
        let console = Console::new();
        let dave = Employee::new(&console, "Dave", 40, "Acme Inc");
        let base: &dyn Introduce = &dave;

        assert_eq!(
            base.describe(),
            "Hi, I'm Dave, 40 years old, and I work at Acme Inc."
        );
        assert_eq!(dave.person().name(), "Dave");
        assert_eq!(dave.person().age(), 40);
        assert_eq!(dave.company(), "Acme Inc");
        assert_eq!(
            dave.person().describe(),
            "Hi, I'm Dave and I'm 40 years old."
        );
    }

    #[test]
    fn test_accessors() {
        let console = Console::new();
        let mut person = Person::new(&console, "Alice", 30);
        person.set_name("Alicia");
        person.set_age(31);

        assert_eq!(person.name(), "Alicia");
        assert_eq!(person.age(), 31);
        assert_eq!(person.describe(), "Hi, I'm Alicia and I'm 31 years old.");
    }

    #[test]
    fn test_derived_lifecycle_order() {
        let console = Console::new();
        {
            let _employee = Employee::new(&console, "Dave", 40, "Acme Inc");
        }

        assert_eq!(
            console.get_output(),
            vec![
                "Person created: Dave",
                "Employee created at Acme Inc",
                "Employee destroyed: Dave",
                "Person destroyed: Dave",
            ]
        );
    }
}
