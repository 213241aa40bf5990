use crate::application::use_cases::BuildAppList;
use crate::domain::repositories::AppRepository;
use std::sync::Arc;

pub struct UseCaseContainer {
    pub build_app_list: Arc<BuildAppList>,
}

impl UseCaseContainer {
    pub fn new(app_repository: Arc<dyn AppRepository>) -> Self {
        Self {
            build_app_list: Arc::new(BuildAppList::new(Arc::clone(&app_repository))),
        }
    }
}
