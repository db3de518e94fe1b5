//! Project showcase modal and image carousel state.
//!
//! The modal is attribute-driven: open/close plus a wrapping image index
//! into whichever project is showing. All lookups are defensive; an index
//! that no longer resolves renders nothing rather than panicking.

/// Static description of one showcased project.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProjectInfo {
    pub id: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub tech: &'static [&'static str],
    pub images: &'static [&'static str],
    pub repo_url: Option<&'static str>,
}

/// Modal + carousel state over a project list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GalleryState {
    open: Option<usize>,
    image: usize,
}

impl GalleryState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the modal on `project`, starting at its first image.
    /// Out-of-range indices are ignored.
    pub fn open(&mut self, project: usize, projects: &[ProjectInfo]) {
        if project >= projects.len() {
            return;
        }
        self.open = Some(project);
        self.image = 0;
    }

    pub fn close(&mut self) {
        self.open = None;
        self.image = 0;
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    pub fn image_index(&self) -> usize {
        self.image
    }

    /// The project currently showing, if any.
    pub fn project<'a>(&self, projects: &'a [ProjectInfo]) -> Option<&'a ProjectInfo> {
        projects.get(self.open?)
    }

    /// The image currently showing, if any.
    pub fn current_image(&self, projects: &[ProjectInfo]) -> Option<&'static str> {
        let project = self.project(projects)?;
        project.images.get(self.image).copied()
    }

    /// Advance the carousel, wrapping past the last image.
    pub fn next_image(&mut self, projects: &[ProjectInfo]) {
        if let Some(project) = self.project(projects) {
            if !project.images.is_empty() {
                self.image = (self.image + 1) % project.images.len();
            }
        }
    }

    /// Step the carousel back, wrapping before the first image.
    pub fn prev_image(&mut self, projects: &[ProjectInfo]) {
        if let Some(project) = self.project(projects) {
            if !project.images.is_empty() {
                self.image = (self.image + project.images.len() - 1) % project.images.len();
            }
        }
    }
}
