//! The content store: named directories of pre-rendered display lines.
//!
//! Directories are the navigable categories of the portfolio (`education`,
//! `projects`, `skills`). Each holds an ordered list of markup-annotated
//! lines, built once from typed data when the store is constructed. `"home"`
//! is always a valid navigation target even though it owns no lines.

mod render;

pub use render::render_progress_bar;

use std::collections::BTreeMap;

use crate::models::Project;

/// The implicit root directory. Holds no content lines.
pub const HOME: &str = "home";

/// Static portfolio content, keyed by directory name.
///
/// Keys are unique by construction (`BTreeMap`) and iteration order is
/// stable, so `ls` output is deterministic.
#[derive(Debug, Clone)]
pub struct ContentStore {
    directories: BTreeMap<String, Vec<String>>,
    projects: Vec<Project>,
}

impl ContentStore {
    /// Build a store from typed content.
    pub fn new(
        education: Vec<String>,
        projects: Vec<Project>,
        skills: Vec<String>,
    ) -> Self {
        let mut directories = BTreeMap::new();
        directories.insert("education".to_string(), education);

        let mut project_lines = vec!["<white>Projects</white>".to_string()];
        project_lines.extend(projects.iter().map(render::render_project_line));
        directories.insert("projects".to_string(), project_lines);

        directories.insert("skills".to_string(), skills);

        Self {
            directories,
            projects,
        }
    }

    /// The default portfolio content.
    pub fn portfolio() -> Self {
        let education = vec![
            "<white>Education</white>".to_string(),
            concat!(
                r#"* <a href="https://www.viva-technology.org/">VIVA Institute of Technology</a> "#,
                r#"<yellow>"Computer Science"</yellow> 2019-2023"#
            )
            .to_string(),
            concat!(
                r#"* <a href="https://en.wikipedia.org/wiki/Maharashtra_State_Board_of_Secondary_and_Higher_Secondary_Education">High Secondary</a> "#,
                r#"J.H.Poddar Junior College <yellow>"Computer Science"</yellow> 2017-2019"#
            )
            .to_string(),
            concat!(
                r#"* <a href="https://en.wikipedia.org/wiki/Maharashtra_State_Board_of_Secondary_and_Higher_Secondary_Education">Secondary School Certificate</a> "#,
                r#"Divine Hymn Hindi High School <yellow>"Hindi Medium"</yellow> 2017"#
            )
            .to_string(),
        ];

        let projects = vec![
            Project::new(
                "Notes App",
                "https://github.com/abhitech2002/notes-app",
                "A React and MySQL-based notes application",
                80,
            ),
            Project::new(
                "Crypto Website",
                "https://crypto-wallet-frontend-roan.vercel.app/",
                "A MERN stack-based cryptocurrency website..",
                90,
            ),
        ];

        let languages = ["JavaScript", "TypeScript", "Python", "SQL", "C", "C++"];
        let libraries = ["React.js", "Redux", "Next JS", "Jest"];
        let tools = ["Docker", "git", "Bit Bucket", "GNU/Linux"];

        let mut skills = vec!["<white>Languages</white>".to_string()];
        skills.extend(
            languages
                .iter()
                .map(|lang| format!("* <yellow>{}</yellow>", lang)),
        );
        skills.push("<white>Libraries</white>".to_string());
        skills.extend(
            libraries
                .iter()
                .map(|lib| format!("* <green>{}</green>", lib)),
        );
        skills.push("<white>Tools</white>".to_string());
        skills.extend(tools.iter().map(|tool| format!("* <blue>{}</blue>", tool)));

        Self::new(education, projects, skills)
    }

    /// Whether `name` is a content directory (does not include `"home"`).
    pub fn has_directory(&self, name: &str) -> bool {
        self.directories.contains_key(name)
    }

    /// The stored lines for a directory, in stored order.
    pub fn lines(&self, name: &str) -> Option<&[String]> {
        self.directories.get(name).map(|v| v.as_slice())
    }

    /// All directory keys, in stable order.
    pub fn directory_names(&self) -> impl Iterator<Item = &str> {
        self.directories.keys().map(|k| k.as_str())
    }

    /// The typed projects backing the `projects` directory.
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Find a project by exact, case-insensitive name.
    pub fn find_project(&self, name: &str) -> Option<&Project> {
        self.projects
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }
}

impl Default for ContentStore {
    fn default() -> Self {
        Self::portfolio()
    }
}
