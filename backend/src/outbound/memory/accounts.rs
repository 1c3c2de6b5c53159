//! Admin and user repositories over the in-memory tables.

use async_trait::async_trait;

use crate::domain::ports::{
    AdminRepository, AdminRepositoryError, UniqueKey, UserRepository, UserRepositoryError,
};
use crate::domain::{
    Admin, AdminChanges, AdminId, AdminProfile, PasswordHash, User, UserChanges, UserId,
    UserProfile,
};

use super::{InMemoryStore, next_id};

/// First unique key taken by another account in the same collection.
fn taken_key<'a>(
    accounts: impl IntoIterator<Item = (i64, &'a str, &'a str)>,
    email: Option<&str>,
    national_id: Option<&str>,
    except: Option<i64>,
) -> Option<UniqueKey> {
    let mut clash = None;
    for (id, existing_email, existing_national_id) in accounts {
        if Some(id) == except {
            continue;
        }
        if email == Some(existing_email) {
            return Some(UniqueKey::Email);
        }
        if national_id == Some(existing_national_id) {
            clash = Some(UniqueKey::NationalId);
        }
    }
    clash
}

#[async_trait]
impl AdminRepository for InMemoryStore {
    async fn insert(
        &self,
        profile: &AdminProfile,
        password_hash: &PasswordHash,
    ) -> Result<Admin, AdminRepositoryError> {
        let mut tables = self.lock();
        let accounts = tables
            .admins
            .values()
            .map(|a| (a.id.get(), a.email.as_str(), a.national_id.as_str()));
        if let Some(key) = taken_key(
            accounts,
            Some(profile.email.as_str()),
            Some(profile.national_id.as_str()),
            None,
        ) {
            return Err(AdminRepositoryError::duplicate(key));
        }
        let id = AdminId::new(next_id(&mut tables.sequences.admins));
        let admin = Admin::from_profile(id, profile.clone(), password_hash.clone());
        tables.admins.insert(id, admin.clone());
        Ok(admin)
    }

    async fn find_by_id(&self, id: AdminId) -> Result<Option<Admin>, AdminRepositoryError> {
        Ok(self.lock().admins.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Admin>, AdminRepositoryError> {
        Ok(self
            .lock()
            .admins
            .values()
            .find(|admin| admin.email == email)
            .cloned())
    }

    async fn list(&self) -> Result<Vec<Admin>, AdminRepositoryError> {
        Ok(self.lock().admins.values().cloned().collect())
    }

    async fn update(
        &self,
        id: AdminId,
        changes: &AdminChanges,
    ) -> Result<Option<Admin>, AdminRepositoryError> {
        let mut tables = self.lock();
        if !tables.admins.contains_key(&id) {
            return Ok(None);
        }
        let accounts = tables
            .admins
            .values()
            .map(|a| (a.id.get(), a.email.as_str(), a.national_id.as_str()));
        if let Some(key) = taken_key(
            accounts,
            changes.email.as_deref(),
            changes.national_id.as_deref(),
            Some(id.get()),
        ) {
            return Err(AdminRepositoryError::duplicate(key));
        }
        Ok(tables.admins.get_mut(&id).map(|admin| {
            changes.apply_to(admin);
            admin.clone()
        }))
    }

    async fn delete(&self, id: AdminId) -> Result<Option<Admin>, AdminRepositoryError> {
        let mut tables = self.lock();
        if tables.companies.values().any(|c| c.admin_id == id) {
            return Err(AdminRepositoryError::still_referenced("companies"));
        }
        Ok(tables.admins.remove(&id))
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn insert(
        &self,
        profile: &UserProfile,
        password_hash: &PasswordHash,
    ) -> Result<User, UserRepositoryError> {
        let mut tables = self.lock();
        let accounts = tables
            .users
            .values()
            .map(|u| (u.id.get(), u.email.as_str(), u.national_id.as_str()));
        if let Some(key) = taken_key(
            accounts,
            Some(profile.email.as_str()),
            Some(profile.national_id.as_str()),
            None,
        ) {
            return Err(UserRepositoryError::duplicate(key));
        }
        let id = UserId::new(next_id(&mut tables.sequences.users));
        let user = User::from_profile(id, profile.clone(), password_hash.clone());
        tables.users.insert(id, user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserRepositoryError> {
        Ok(self.lock().users.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserRepositoryError> {
        Ok(self
            .lock()
            .users
            .values()
            .find(|user| user.email == email)
            .cloned())
    }

    async fn list(&self) -> Result<Vec<User>, UserRepositoryError> {
        Ok(self.lock().users.values().cloned().collect())
    }

    async fn update(
        &self,
        id: UserId,
        changes: &UserChanges,
    ) -> Result<Option<User>, UserRepositoryError> {
        let mut tables = self.lock();
        if !tables.users.contains_key(&id) {
            return Ok(None);
        }
        let accounts = tables
            .users
            .values()
            .map(|u| (u.id.get(), u.email.as_str(), u.national_id.as_str()));
        if let Some(key) = taken_key(
            accounts,
            changes.email.as_deref(),
            changes.national_id.as_deref(),
            Some(id.get()),
        ) {
            return Err(UserRepositoryError::duplicate(key));
        }
        Ok(tables.users.get_mut(&id).map(|user| {
            changes.apply_to(user);
            user.clone()
        }))
    }

    async fn delete(&self, id: UserId) -> Result<Option<User>, UserRepositoryError> {
        let mut tables = self.lock();
        let Some(user) = tables.users.remove(&id) else {
            return Ok(None);
        };
        tables.experiences.retain(|_, entry| entry.user_id != id);
        tables.user_skills.retain(|(user_id, _)| *user_id != id);
        tables.applications.retain(|(user_id, _)| *user_id != id);
        Ok(Some(user))
    }
}
