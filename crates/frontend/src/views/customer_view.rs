use crate::api::ApiClient;
use crate::notice::Notice;
use crate::reconcile::{apply_patch, Patch};
use common::{NewProfileRequest, ProfileRecord};

/// The add-customer form
#[derive(Debug, Clone, Default)]
pub struct ProfileDraft {
    pub first_name: String,
    pub last_name: String,
    pub gender: String,
    pub address: String,
}

impl ProfileDraft {
    fn is_complete(&self) -> bool {
        [&self.first_name, &self.last_name, &self.gender, &self.address]
            .iter()
            .all(|field| !field.trim().is_empty())
    }
}

pub struct CustomerView {
    client: ApiClient,
    profiles: Vec<ProfileRecord>,
}

impl CustomerView {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            profiles: Vec::new(),
        }
    }

    pub fn profiles(&self) -> &[ProfileRecord] {
        &self.profiles
    }

    pub async fn load(&mut self) -> Option<Notice> {
        match self.client.list_profiles().await {
            Ok(profiles) => {
                self.profiles = profiles;
                None
            }
            Err(e) => Some(Notice::error("Error fetching users.", &e)),
        }
    }

    pub async fn add(&mut self, draft: ProfileDraft) -> Notice {
        if !draft.is_complete() {
            return Notice::warning(
                "Incomplete Information",
                "Please fill in all the fields before adding a user.",
            );
        }

        let request = NewProfileRequest {
            first_name: Some(draft.first_name),
            last_name: Some(draft.last_name),
            gender: Some(draft.gender),
            address: Some(draft.address),
            profile_image: None,
        };

        match self.client.add_profile(&request).await {
            Ok(profile) => {
                apply_patch(&mut self.profiles, Patch::Append(profile));
                Notice::success("User Added", "The user has been added successfully!")
            }
            Err(e) => Notice::error("An error occurred while adding the user.", &e),
        }
    }

    pub async fn remove(&mut self, id: &str, confirmed: bool) -> Option<Notice> {
        if !confirmed {
            return None;
        }

        match self.client.delete_profile(id).await {
            Ok(_) => {
                apply_patch(&mut self.profiles, Patch::Remove(id.to_string()));
                Some(Notice::success("Deleted!", "The user has been deleted."))
            }
            Err(e) => Some(Notice::error(
                "An error occurred while deleting the user.",
                &e,
            )),
        }
    }
}
