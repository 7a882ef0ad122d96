//! Person / PersonDto fixtures for the integration suites.

#![allow(dead_code)]

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use dtomap_core::{Reflect, TypeRegistry};

pub const PERSON: &str = "fixtures::Person";
pub const PERSON_DTO: &str = "fixtures::PersonDto";
pub const ADDRESS: &str = "fixtures::Address";

pub fn digest(password: &str) -> String {
    let mut hasher = DefaultHasher::new();
    password.hash(&mut hasher);
    format!("{:016x}", hasher.finish())
}

/// A domain object whose only constructor requires a name.
#[derive(Debug, Reflect)]
#[reflect(
    crate = "dtomap_core",
    name = PERSON,
    blank = Person::blank,
    getters(first_name, last_name, user_role, full_name),
    setters(set_first_name, set_last_name, set_access_role),
    try_setters(set_plain_password)
)]
pub struct Person {
    first_name: String,
    last_name: String,
    age: i64,
    pub city: String,
    role: String,
    pub(crate) password: String,
}

impl Person {
    pub fn new(first_name: &str, last_name: &str) -> Self {
        Person {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            ..Person::blank()
        }
    }

    fn blank() -> Self {
        Person {
            first_name: String::new(),
            last_name: String::new(),
            age: 10,
            city: "City".to_string(),
            role: "user".to_string(),
            password: String::new(),
        }
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn set_first_name(&mut self, first_name: String) {
        self.first_name = first_name;
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn set_last_name(&mut self, last_name: String) {
        self.last_name = last_name;
    }

    pub fn age(&self) -> i64 {
        self.age
    }

    pub fn user_role(&self) -> &str {
        &self.role
    }

    pub fn set_access_role(&mut self, role: String) {
        self.role = role;
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn set_plain_password(&mut self, password: String) -> Result<(), &'static str> {
        if password.is_empty() {
            return Err("password must not be empty");
        }
        self.password = digest(&password);
        Ok(())
    }
}

/// Plain data holder mirroring part of `Person`.
#[derive(Debug, Default, Clone, PartialEq, Reflect)]
#[reflect(crate = "dtomap_core", name = PERSON_DTO)]
pub struct PersonDto {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub age: Option<i64>,
    pub city_name: Option<String>,
    pub full_name: Option<String>,
    pub role: Option<String>,
    pub password: Option<String>,
}

/// An unrelated type, for type-mismatch checks.
#[derive(Debug, Default, Reflect)]
#[reflect(crate = "dtomap_core", name = ADDRESS)]
pub struct Address {
    pub city: String,
}

pub fn registry() -> TypeRegistry {
    let mut registry = TypeRegistry::new();
    registry.register::<Person>().unwrap();
    registry.register::<PersonDto>().unwrap();
    registry.register::<Address>().unwrap();
    registry
}
