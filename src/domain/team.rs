use serde::{Deserialize, Serialize};

/// The closed set of staffing roles in the cost model. The mobile developer
/// is the only contractor role; everyone else is permanent staff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Manager,
    Developer,
    Dba,
    Junior,
    Mobile,
}

impl Role {
    pub const ALL: [Role; 5] = [
        Role::Manager,
        Role::Developer,
        Role::Dba,
        Role::Junior,
        Role::Mobile,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Role::Manager => "Manager",
            Role::Developer => "C#/JS Developer",
            Role::Dba => "Database Administrator",
            Role::Junior => "Junior DBA/Tester",
            Role::Mobile => "Mobile Developer (Contractor)",
        }
    }

    pub fn short_label(&self) -> &'static str {
        match self {
            Role::Manager => "Manager",
            Role::Developer => "Developer",
            Role::Dba => "DBA",
            Role::Junior => "Junior",
            Role::Mobile => "Mobile",
        }
    }

    pub fn is_contractor(&self) -> bool {
        matches!(self, Role::Mobile)
    }
}

/// One `f64` per role. Used both for the hourly rate table and for per-phase
/// utilization percentages.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PerRole {
    pub manager: f64,
    pub developer: f64,
    pub dba: f64,
    pub junior: f64,
    pub mobile: f64,
}

impl PerRole {
    pub fn get(&self, role: Role) -> f64 {
        match role {
            Role::Manager => self.manager,
            Role::Developer => self.developer,
            Role::Dba => self.dba,
            Role::Junior => self.junior,
            Role::Mobile => self.mobile,
        }
    }

    pub fn set(&mut self, role: Role, value: f64) {
        match role {
            Role::Manager => self.manager = value,
            Role::Developer => self.developer = value,
            Role::Dba => self.dba = value,
            Role::Junior => self.junior = value,
            Role::Mobile => self.mobile = value,
        }
    }

}

/// Default hourly rates in $/hour.
pub fn default_rates() -> PerRole {
    PerRole {
        manager: 165.0,
        developer: 160.0,
        dba: 155.0,
        junior: 150.0,
        mobile: 150.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_and_set_cover_every_role() {
        let mut values = PerRole::default();
        for (index, role) in Role::ALL.iter().enumerate() {
            values.set(*role, index as f64 + 1.0);
        }
        for (index, role) in Role::ALL.iter().enumerate() {
            assert_eq!(values.get(*role), index as f64 + 1.0);
        }
    }

    #[test]
    fn mobile_is_the_only_contractor() {
        let contractors: Vec<Role> = Role::ALL
            .iter()
            .copied()
            .filter(Role::is_contractor)
            .collect();
        assert_eq!(contractors, vec![Role::Mobile]);
    }
}
