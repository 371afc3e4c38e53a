use color_eyre::eyre::eyre;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::{
    MemberRole, MembershipId, MembershipStore, MembershipStoreError,
    MembershipWithProfile, MembershipWithProject, Profile, Project, ProjectId,
    TeamMembership, UserId,
};

const SQL_MEMBERSHIPS_FOR_PROJECT: &str = r#"
    SELECT team_members.id, team_members.user_id, team_members.role,
           profiles.id AS profile_id, profiles.first_name, profiles.last_name,
           profiles.avatar_url
    FROM team_members
    LEFT JOIN profiles ON profiles.id = team_members.user_id
    WHERE team_members.project_id = $1
"#;

const SQL_MEMBERSHIPS_FOR_USER: &str = r#"
    SELECT team_members.id, team_members.project_id, team_members.role,
           projects.id AS joined_project_id, projects.name, projects.status
    FROM team_members
    LEFT JOIN projects ON projects.id = team_members.project_id
    WHERE team_members.user_id = $1
"#;

#[derive(Debug, sqlx::FromRow)]
struct MemberProfileRow {
    id: Uuid,
    user_id: Option<Uuid>,
    role: Option<String>,
    profile_id: Option<Uuid>,
    first_name: Option<String>,
    last_name: Option<String>,
    avatar_url: Option<String>,
}

#[derive(Debug, sqlx::FromRow)]
struct MemberProjectRow {
    id: Uuid,
    project_id: Uuid,
    role: Option<String>,
    joined_project_id: Option<Uuid>,
    name: Option<String>,
    status: Option<String>,
}

#[derive(Debug, sqlx::FromRow)]
struct ProfileRow {
    id: Uuid,
    first_name: Option<String>,
    last_name: Option<String>,
    avatar_url: Option<String>,
}

#[derive(Debug, sqlx::FromRow)]
struct ProjectRow {
    id: Uuid,
    name: Option<String>,
    status: Option<String>,
}

impl From<MemberProfileRow> for MembershipWithProfile {
    fn from(row: MemberProfileRow) -> Self {
        let profile = row.profile_id.map(|profile_id| {
            Profile::new(
                UserId::new(profile_id),
                row.first_name,
                row.last_name,
                row.avatar_url,
            )
        });
        Self {
            membership_id: MembershipId::new(row.id),
            user_id: row.user_id.map(UserId::new),
            role: row.role,
            profile,
        }
    }
}

impl From<MemberProjectRow> for MembershipWithProject {
    fn from(row: MemberProjectRow) -> Self {
        let project = row.joined_project_id.map(|project_id| {
            Project::new(ProjectId::new(project_id), row.name, row.status)
        });
        Self {
            membership_id: MembershipId::new(row.id),
            project_id: ProjectId::new(row.project_id),
            role: row.role,
            project,
        }
    }
}

const PROJECT_USER_CONSTRAINT: &str = "team_members_project_user_key";

fn unique_violation_error(constraint: Option<&str>) -> MembershipStoreError {
    match constraint {
        Some(PROJECT_USER_CONSTRAINT) => MembershipStoreError::AlreadyMember,
        _ => MembershipStoreError::MembershipIDExists,
    }
}

pub struct PostgresMembershipStore {
    pool: PgPool,
}

impl PostgresMembershipStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl MembershipStore for PostgresMembershipStore {
    #[tracing::instrument(
        name = "Getting project memberships from PostgreSQL",
        skip_all
    )]
    async fn get_memberships_for_project(
        &self,
        project_id: &ProjectId,
    ) -> Result<Vec<MembershipWithProfile>, MembershipStoreError> {
        let rows =
            sqlx::query_as::<_, MemberProfileRow>(SQL_MEMBERSHIPS_FOR_PROJECT)
                .bind(project_id.as_ref())
                .fetch_all(&self.pool)
                .await
                .map_err(|e| MembershipStoreError::UnexpectedError(eyre!(e)))?;

        Ok(rows.into_iter().map(MembershipWithProfile::from).collect())
    }

    #[tracing::instrument(
        name = "Getting user memberships from PostgreSQL",
        skip_all
    )]
    async fn get_memberships_for_user(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<MembershipWithProject>, MembershipStoreError> {
        let rows =
            sqlx::query_as::<_, MemberProjectRow>(SQL_MEMBERSHIPS_FOR_USER)
                .bind(user_id.as_ref())
                .fetch_all(&self.pool)
                .await
                .map_err(|e| MembershipStoreError::UnexpectedError(eyre!(e)))?;

        Ok(rows.into_iter().map(MembershipWithProject::from).collect())
    }

    #[tracing::instrument(name = "Getting profile from PostgreSQL", skip_all)]
    async fn get_profile(
        &self,
        user_id: &UserId,
    ) -> Result<Option<Profile>, MembershipStoreError> {
        let row = sqlx::query_as::<_, ProfileRow>(
            r#"
                SELECT id, first_name, last_name, avatar_url
                FROM profiles
                WHERE id = $1
            "#,
        )
        .bind(user_id.as_ref())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| MembershipStoreError::UnexpectedError(eyre!(e)))?;

        Ok(row.map(|row| {
            Profile::new(
                UserId::new(row.id),
                row.first_name,
                row.last_name,
                row.avatar_url,
            )
        }))
    }

    #[tracing::instrument(name = "Getting projects from PostgreSQL", skip_all)]
    async fn get_projects(&self) -> Result<Vec<Project>, MembershipStoreError> {
        let rows = sqlx::query_as::<_, ProjectRow>(
            r#"
                SELECT id, name, status
                FROM projects
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| MembershipStoreError::UnexpectedError(eyre!(e)))?;

        Ok(rows
            .into_iter()
            .map(|row| Project::new(ProjectId::new(row.id), row.name, row.status))
            .collect())
    }

    #[tracing::instrument(name = "Adding membership to PostgreSQL", skip_all)]
    async fn add_membership(
        &mut self,
        membership: &TeamMembership,
    ) -> Result<(), MembershipStoreError> {
        sqlx::query(
            r#"
            INSERT INTO team_members (id, project_id, user_id, role) VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(membership.id.as_ref())
        .bind(membership.project_id.as_ref())
        .bind(membership.user_id.as_ref().map(|id| *id.as_ref()))
        .bind(membership.role.as_ref().map(|role| role.as_ref().to_owned()))
        .execute(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                unique_violation_error(db_err.constraint())
            }
            e => MembershipStoreError::UnexpectedError(eyre!(e)),
        })?;
        Ok(())
    }

    #[tracing::instrument(name = "Updating member role in PostgreSQL", skip_all)]
    async fn update_role(
        &mut self,
        membership_id: &MembershipId,
        role: Option<&MemberRole>,
    ) -> Result<(), MembershipStoreError> {
        let result = sqlx::query(
            r#"
            UPDATE team_members SET role = $2
            WHERE id = $1
            "#,
        )
        .bind(membership_id.as_ref())
        .bind(role.map(|role| role.as_ref().to_owned()))
        .execute(&self.pool)
        .await
        .map_err(|e| MembershipStoreError::UnexpectedError(eyre!(e)))?;

        if result.rows_affected() == 0 {
            return Err(MembershipStoreError::MembershipIDNotFound);
        }
        Ok(())
    }

    #[tracing::instrument(name = "Removing membership from PostgreSQL", skip_all)]
    async fn remove_membership(
        &mut self,
        membership_id: &MembershipId,
    ) -> Result<(), MembershipStoreError> {
        let result = sqlx::query(
            r#"
                DELETE FROM team_members WHERE id = $1
            "#,
        )
        .bind(membership_id.as_ref())
        .execute(&self.pool)
        .await
        .map_err(|e| MembershipStoreError::UnexpectedError(eyre!(e)))?;

        if result.rows_affected() == 0 {
            return Err(MembershipStoreError::MembershipIDNotFound);
        }
        Ok(())
    }
}
