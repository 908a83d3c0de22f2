use crate::model::{Employee, Record};

/// The staff roster.
#[derive(Debug, Clone, Default)]
pub struct EmployeeManager {
    employees: Vec<Employee>,
}

impl EmployeeManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, employee: Employee) {
        self.employees.push(employee);
    }

    /// Remove every employee whose name matches exactly.
    pub fn remove(&mut self, full_name: &str) -> usize {
        let before = self.employees.len();
        self.employees.retain(|e| e.full_name != full_name);
        before - self.employees.len()
    }

    /// First employee whose name matches, ignoring case.
    pub fn find(&self, full_name: &str) -> Option<&Employee> {
        self.employees.iter().find(|e| e.name_matches(full_name))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Employee> {
        self.employees.iter()
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    pub fn serialize(&self) -> Vec<Record> {
        self.employees.iter().map(Employee::to_record).collect()
    }

    /// Replace the roster with the given records.
    pub fn deserialize(&mut self, records: &[Record]) {
        self.employees = records.iter().map(Employee::from_record).collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> EmployeeManager {
        let mut manager = EmployeeManager::new();
        manager.add(Employee::new("Ann Lee", "Clerk", "1", "ann@shop.com"));
        manager.add(Employee::new("Bob Ray", "Manager", "2", "bob@shop.com"));
        manager
    }

    #[test]
    fn test_find_is_case_insensitive() {
        let manager = roster();
        let found = manager.find("ann lee").expect("employee should be found");
        assert_eq!(found.position, "Clerk");
        assert!(manager.find("Ann").is_none());
    }

    #[test]
    fn test_remove_is_exact() {
        let mut manager = roster();
        assert_eq!(manager.remove("ann lee"), 0);
        assert_eq!(manager.len(), 2);
        assert_eq!(manager.remove("Ann Lee"), 1);
        assert_eq!(manager.len(), 1);
    }

    #[test]
    fn test_remove_drops_duplicates() {
        let mut manager = roster();
        manager.add(Employee::new("Bob Ray", "Clerk", "3", "bob2@shop.com"));
        assert_eq!(manager.remove("Bob Ray"), 2);
        assert_eq!(manager.len(), 1);
    }

    #[test]
    fn test_serialize_round_trip() {
        let manager = roster();
        let records = manager.serialize();

        let mut restored = EmployeeManager::new();
        restored.deserialize(&records);
        assert_eq!(restored.serialize(), records);
    }
}
