//! In-memory service doubles for workflow tests

use std::cell::{Cell, RefCell};
use std::collections::HashSet;

use async_trait::async_trait;

use crate::models::{ConsoleError, ConsoleResult, Course, MediaFile, PendingUpload, Student};
use crate::services::{CourseApi, MediaApi, StudentApi};

fn unavailable() -> ConsoleError {
    ConsoleError::network("connection refused")
}

/// Shared failure switches and a call counter
#[derive(Default)]
struct Switches {
    calls: Cell<usize>,
    fail_list: Cell<bool>,
    fail_create: Cell<bool>,
    fail_delete: Cell<bool>,
}

impl Switches {
    fn hit(&self, flag: &Cell<bool>) -> ConsoleResult<()> {
        self.calls.set(self.calls.get() + 1);
        if flag.replace(false) { Err(unavailable()) } else { Ok(()) }
    }
}

#[derive(Default)]
pub struct FakeCourses {
    records: RefCell<Vec<Course>>,
    switches: Switches,
}

impl FakeCourses {
    pub fn with(records: &[(&str, &str)]) -> Self {
        let fake = Self::default();
        *fake.records.borrow_mut() = records
            .iter()
            .map(|(id, name)| Course {
                id: id.to_string(),
                name: name.to_string(),
                duration: "1 Year".to_string(),
            })
            .collect();
        fake
    }

    pub fn calls(&self) -> usize {
        self.switches.calls.get()
    }

    pub fn fail_next_list(&self) {
        self.switches.fail_list.set(true);
    }

    pub fn fail_next_create(&self) {
        self.switches.fail_create.set(true);
    }
}

#[async_trait(?Send)]
impl CourseApi for FakeCourses {
    async fn list_all(&self) -> ConsoleResult<Vec<Course>> {
        self.switches.hit(&self.switches.fail_list)?;
        Ok(self.records.borrow().clone())
    }

    async fn create(&self, course: &Course) -> ConsoleResult<Course> {
        self.switches.hit(&self.switches.fail_create)?;
        self.records.borrow_mut().push(course.clone());
        Ok(course.clone())
    }

    async fn delete(&self, id: &str) -> ConsoleResult<()> {
        self.switches.hit(&self.switches.fail_delete)?;
        self.records.borrow_mut().retain(|c| c.id != id);
        Ok(())
    }
}

#[derive(Default)]
pub struct FakeStudents {
    records: RefCell<Vec<Student>>,
    switches: Switches,
}

impl FakeStudents {
    pub fn with(registration_numbers: &[&str]) -> Self {
        let fake = Self::default();
        *fake.records.borrow_mut() = registration_numbers
            .iter()
            .map(|number| Student {
                registration_number: number.to_string(),
                full_name: "Test Student".to_string(),
                address: "Colombo".to_string(),
                contact: "077-1234567".to_string(),
                email: "student@example.lk".to_string(),
            })
            .collect();
        fake
    }

    pub fn calls(&self) -> usize {
        self.switches.calls.get()
    }

    pub fn fail_next_list(&self) {
        self.switches.fail_list.set(true);
    }
}

#[async_trait(?Send)]
impl StudentApi for FakeStudents {
    async fn list_all(&self) -> ConsoleResult<Vec<Student>> {
        self.switches.hit(&self.switches.fail_list)?;
        Ok(self.records.borrow().clone())
    }

    async fn create(&self, student: &Student) -> ConsoleResult<Student> {
        self.switches.hit(&self.switches.fail_create)?;
        self.records.borrow_mut().push(student.clone());
        Ok(student.clone())
    }

    async fn delete(&self, registration_number: &str) -> ConsoleResult<()> {
        self.switches.hit(&self.switches.fail_delete)?;
        self.records
            .borrow_mut()
            .retain(|s| s.registration_number != registration_number);
        Ok(())
    }
}

#[derive(Default)]
pub struct FakeMedia {
    files: RefCell<Vec<MediaFile>>,
    uploaded: RefCell<Vec<String>>,
    failing_uploads: RefCell<HashSet<String>>,
    switches: Switches,
}

impl FakeMedia {
    pub fn with(files: &[(&str, &str)]) -> Self {
        let fake = Self::default();
        *fake.files.borrow_mut() = files
            .iter()
            .map(|(id, filename)| MediaFile {
                id: id.to_string(),
                filename: filename.to_string(),
                url: None,
            })
            .collect();
        fake
    }

    pub fn calls(&self) -> usize {
        self.switches.calls.get()
    }

    /// Filenames the service received, in completion order
    pub fn uploaded(&self) -> Vec<String> {
        self.uploaded.borrow().clone()
    }

    pub fn fail_upload_of(&self, filename: &str) {
        self.failing_uploads.borrow_mut().insert(filename.to_string());
    }

    pub fn fail_next_list(&self) {
        self.switches.fail_list.set(true);
    }

    pub fn fail_next_delete(&self) {
        self.switches.fail_delete.set(true);
    }
}

#[async_trait(?Send)]
impl MediaApi for FakeMedia {
    async fn list_all(&self) -> ConsoleResult<Vec<MediaFile>> {
        self.switches.hit(&self.switches.fail_list)?;
        Ok(self.files.borrow().clone())
    }

    async fn upload_file(&self, upload: PendingUpload) -> ConsoleResult<MediaFile> {
        self.switches.hit(&self.switches.fail_create)?;
        if self.failing_uploads.borrow().contains(&upload.filename) {
            return Err(ConsoleError::http(500, "disk full"));
        }
        let file = MediaFile {
            id: format!("file-{}", self.files.borrow().len() + 1),
            filename: upload.filename.clone(),
            url: None,
        };
        self.uploaded.borrow_mut().push(upload.filename);
        self.files.borrow_mut().push(file.clone());
        Ok(file)
    }

    async fn delete(&self, id: &str) -> ConsoleResult<()> {
        self.switches.hit(&self.switches.fail_delete)?;
        self.files.borrow_mut().retain(|f| f.id != id);
        Ok(())
    }

    fn resource_url(&self, id: &str) -> String {
        format!("http://media.test/files/{id}")
    }
}
