use sea_orm::DatabaseConnection;

use crate::{
    data::member::MemberRepository,
    error::{auth::AuthError, AppError},
    model::member::{CreateMemberParams, LoginParams, Member, SignupParams},
    util::password,
};

pub struct MemberService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MemberService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new member.
    ///
    /// Rejects duplicate emails before hashing, then stores the argon2 hash in
    /// place of the plaintext password.
    ///
    /// # Returns
    /// - `Ok(Member)` - The created member
    /// - `Err(AppError::BadRequest)` - Email already registered
    pub async fn signup(&self, params: SignupParams) -> Result<Member, AppError> {
        let repo = MemberRepository::new(self.db);

        if repo.email_exists(&params.email).await? {
            return Err(AppError::BadRequest(
                "Email is already registered".to_string(),
            ));
        }

        let password_hash = password::hash_password(&params.password)?;

        let member = repo
            .create(CreateMemberParams {
                email: params.email,
                password_hash,
                nickname: params.nickname,
                profile_image: params.profile_image,
            })
            .await?;

        Ok(member)
    }

    /// Verifies credentials and returns the member on success.
    ///
    /// Unknown email and wrong password share the `InvalidCredentials` error
    /// path so the response does not reveal which half failed.
    pub async fn login(&self, params: LoginParams) -> Result<Member, AppError> {
        let repo = MemberRepository::new(self.db);

        let Some(member) = repo.find_by_email(&params.email).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !password::verify_password(&params.password, &member.password) {
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(member)
    }
}
