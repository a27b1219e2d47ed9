use crate::domain::model::{Course, MenuEntry};
use serde::Serialize;

/// Header for the full list, e.g. "5 items total".
pub fn total_label(count: usize) -> String {
    if count == 1 {
        "1 item total".to_string()
    } else {
        format!("{} items total", count)
    }
}

/// Header for a filtered list, e.g. "2 starters found" or "6 total items".
pub fn filter_label(course: Option<Course>, count: usize) -> String {
    match course {
        Some(course) => {
            let noun = course.as_str().to_lowercase();
            let plural = if count == 1 { "" } else { "s" };
            format!("{} {}{} found", count, noun, plural)
        }
        None => format!("{} total items", count),
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CourseCounts {
    pub starter: usize,
    pub main: usize,
    pub dessert: usize,
}

impl CourseCounts {
    pub fn get(&self, course: Course) -> usize {
        match course {
            Course::Starter => self.starter,
            Course::Main => self.main,
            Course::Dessert => self.dessert,
        }
    }

    pub fn total(&self) -> usize {
        self.starter + self.main + self.dessert
    }
}

pub fn course_counts<'a, I>(entries: I) -> CourseCounts
where
    I: IntoIterator<Item = &'a MenuEntry>,
{
    entries
        .into_iter()
        .fold(CourseCounts::default(), |mut counts, entry| {
            match entry.course() {
                Course::Starter => counts.starter += 1,
                Course::Main => counts.main += 1,
                Course::Dessert => counts.dessert += 1,
            }
            counts
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::MenuCatalog;

    #[test]
    fn test_total_label() {
        assert_eq!(total_label(0), "0 items total");
        assert_eq!(total_label(1), "1 item total");
        assert_eq!(total_label(5), "5 items total");
    }

    #[test]
    fn test_filter_label() {
        assert_eq!(filter_label(Some(Course::Starter), 2), "2 starters found");
        assert_eq!(filter_label(Some(Course::Main), 1), "1 main found");
        assert_eq!(filter_label(Some(Course::Dessert), 0), "0 desserts found");
        assert_eq!(filter_label(None, 6), "6 total items");
    }

    #[test]
    fn test_course_counts() {
        let catalog = MenuCatalog::with_default_seed();
        let counts = course_counts(catalog.list_all());
        assert_eq!(counts.get(Course::Starter), 2);
        assert_eq!(counts.get(Course::Main), 2);
        assert_eq!(counts.get(Course::Dessert), 2);
        assert_eq!(counts.total(), catalog.len());
    }
}
