//! Observer: bonuses that react whenever a salary changes.
//!
//! Registration is explicit. Build the observer first, then hand it to
//! [`Salary::attach`], so no callback ever sees a half-built observer.

use std::fmt;

/// Handle returned by [`Salary::attach`], used to detach later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

/// Something that wants to hear about salary changes.
pub trait SalaryObserver {
    /// Called after the value changed; `salary.value()` is already the new one.
    fn update(&self, salary: &Salary) -> String;
}

/// Subject: a settable value with an ordered list of observers.
#[derive(Default)]
pub struct Salary {
    value: i64,
    observers: Vec<(ObserverId, Box<dyn SalaryObserver>)>,
    next_id: u64,
}

impl Salary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    pub fn attach(&mut self, observer: Box<dyn SalaryObserver>) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, observer));
        id
    }

    /// Returns `false` if `id` was not attached.
    pub fn detach(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(oid, _)| *oid != id);
        self.observers.len() != before
    }

    /// Store `value`, then notify every observer in registration order.
    ///
    /// Returns each observer's reaction, in the same order.
    pub fn set(&mut self, value: i64) -> Vec<String> {
        self.value = value;
        self.notify()
    }

    fn notify(&self) -> Vec<String> {
        self.observers
            .iter()
            .map(|(_, observer)| observer.update(self))
            .collect()
    }
}

impl fmt::Debug for Salary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Salary")
            .field("value", &self.value)
            .field("observers", &self.observers.len())
            .finish()
    }
}

/// Bonuses are computed in `i128`, so every `i64` salary has an exact bonus.
#[derive(Debug, Default, Clone, Copy)]
pub struct ManagerBonus;

impl SalaryObserver for ManagerBonus {
    fn update(&self, salary: &Salary) -> String {
        format!("Manager Bonus is {}", i128::from(salary.value()) * 3)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct EmployeeBonus;

impl SalaryObserver for EmployeeBonus {
    fn update(&self, salary: &Salary) -> String {
        format!("Employee Bonus is {}", i128::from(salary.value()) * 2)
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use super::*;

    type Log = Rc<RefCell<Vec<(usize, i64)>>>;

    struct Recording {
        tag: usize,
        log: Log,
    }

    impl SalaryObserver for Recording {
        fn update(&self, salary: &Salary) -> String {
            self.log.borrow_mut().push((self.tag, salary.value()));
            format!("observer {}", self.tag)
        }
    }

    #[test]
    fn bonuses_follow_salary() {
        let mut salary = Salary::new();
        salary.attach(Box::new(ManagerBonus));
        salary.attach(Box::new(EmployeeBonus));

        assert_eq!(
            salary.set(1000),
            ["Manager Bonus is 3000", "Employee Bonus is 2000"]
        );
        assert_eq!(
            salary.set(2000),
            ["Manager Bonus is 6000", "Employee Bonus is 4000"]
        );
    }

    #[test]
    fn each_observer_updated_once_in_registration_order() {
        let log: Log = Rc::default();
        let mut salary = Salary::new();
        for tag in 0..5 {
            salary.attach(Box::new(Recording {
                tag,
                log: Rc::clone(&log),
            }));
        }

        let lines = salary.set(1234);

        let expected: Vec<(usize, i64)> = (0..5).map(|tag| (tag, 1234)).collect();
        assert_eq!(*log.borrow(), expected);
        assert_eq!(lines.len(), 5);
    }

    #[test]
    fn detached_observer_is_not_notified() {
        let log: Log = Rc::default();
        let mut salary = Salary::new();
        let first = salary.attach(Box::new(Recording {
            tag: 1,
            log: Rc::clone(&log),
        }));
        salary.attach(Box::new(Recording {
            tag: 2,
            log: Rc::clone(&log),
        }));

        assert!(salary.detach(first));
        assert!(!salary.detach(first));
        salary.set(7);

        assert_eq!(*log.borrow(), [(2, 7)]);
        assert_eq!(salary.observer_count(), 1);
    }

    #[test]
    fn huge_salary_still_reaches_every_observer() {
        let log: Log = Rc::default();
        let mut salary = Salary::new();
        salary.attach(Box::new(ManagerBonus));
        salary.attach(Box::new(EmployeeBonus));
        salary.attach(Box::new(Recording {
            tag: 9,
            log: Rc::clone(&log),
        }));

        let lines = salary.set(i64::MAX / 2);

        assert_eq!(
            lines,
            [
                "Manager Bonus is 13835058055282163709",
                "Employee Bonus is 9223372036854775806",
                "observer 9",
            ]
        );
        assert_eq!(*log.borrow(), [(9, i64::MAX / 2)]);

        assert_eq!(
            salary.set(i64::MIN)[0],
            format!("Manager Bonus is {}", i128::from(i64::MIN) * 3)
        );
    }

    #[test]
    fn no_observers_means_no_lines() {
        let mut salary = Salary::new();
        assert!(salary.set(10).is_empty());
        assert_eq!(salary.value(), 10);
    }
}
