use log::info;
use std::sync::Arc;

use crate::ENV;
use crate::api::error;
use crate::modules::user::model::{
    InsertUser, LoginModel, RegisterModel, UpdateMeModel, UpdateUser, UserResponse,
};
use crate::modules::user::repository::UserRepository;
use crate::utils::{Claims, hash_password, verify_password};

#[derive(Clone)]
pub struct UserService {
    repo: Arc<dyn UserRepository + Send + Sync>,
}

impl UserService {
    pub fn with_dependencies(repo: Arc<dyn UserRepository + Send + Sync>) -> Self {
        info!("UserService initialized with dependencies");
        UserService { repo }
    }

    pub async fn register(
        &self,
        model: RegisterModel,
    ) -> Result<(UserResponse, String), error::SystemError> {
        let new_user = InsertUser {
            email: model.email,
            password_hash: hash_password(&model.password)?,
            name: model.name,
        };

        let user = self.repo.create(&new_user).await.map_err(|e| {
            if e.is_unique_violation() {
                error::SystemError::conflict("Email already registered")
            } else {
                e
            }
        })?;

        let token = Claims::new(user.id, ENV.access_token_expiration)
            .encode(ENV.jwt_secret.as_ref())?;

        Ok((UserResponse::from(user), token))
    }

    pub async fn login(
        &self,
        model: LoginModel,
    ) -> Result<(UserResponse, String), error::SystemError> {
        let user = self
            .repo
            .find_by_email(&model.email)
            .await?
            .ok_or_else(|| error::SystemError::unauthorized("Invalid credentials"))?;

        let valid = verify_password(&user.password_hash, &model.password)?;
        if !valid {
            return Err(error::SystemError::unauthorized("Invalid credentials"));
        }

        let token = Claims::new(user.id, ENV.access_token_expiration)
            .encode(ENV.jwt_secret.as_ref())?;

        Ok((UserResponse::from(user), token))
    }

    pub async fn get_by_id(&self, id: i64) -> Result<UserResponse, error::SystemError> {
        let user = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| error::SystemError::not_found("User not found"))?;
        Ok(UserResponse::from(user))
    }

    pub async fn update_me(
        &self,
        id: i64,
        model: UpdateMeModel,
    ) -> Result<UserResponse, error::SystemError> {
        let user = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| error::SystemError::not_found("User not found"))?;

        let password_hash = match model.new_password {
            Some(new_password) => {
                let current = model.current_password.ok_or_else(|| {
                    error::SystemError::bad_request(
                        "current_password required to set a new password",
                    )
                })?;
                if !verify_password(&user.password_hash, &current)? {
                    return Err(error::SystemError::unauthorized(
                        "current_password is incorrect",
                    ));
                }
                Some(hash_password(&new_password)?)
            }
            None => None,
        };

        let update = UpdateUser { name: model.name, email: model.email, password_hash };

        let updated = self.repo.update(id, &update).await.map_err(|e| {
            if e.is_unique_violation() {
                error::SystemError::conflict("Email already in use")
            } else {
                e
            }
        })?;

        Ok(UserResponse::from(updated))
    }
}
