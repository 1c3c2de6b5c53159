//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `migrations/` exactly. Regenerate with
//! `diesel print-schema` after changing a migration.

diesel::table! {
    /// Administrator accounts. `email` and `national_id` are unique.
    admins (id) {
        id -> Int8,
        name -> Text,
        national_id -> Text,
        email -> Text,
        phone -> Text,
        password_hash -> Text,
    }
}

diesel::table! {
    /// Candidate accounts. `email` and `national_id` are unique.
    users (id) {
        id -> Int8,
        name -> Text,
        national_id -> Text,
        email -> Text,
        phone -> Text,
        work_area -> Text,
        education_level -> Text,
        password_hash -> Text,
    }
}

diesel::table! {
    /// Companies; the owning admin cannot be deleted while rows exist.
    companies (id) {
        id -> Int8,
        name -> Text,
        description -> Text,
        city -> Text,
        postal_code -> Text,
        employee_count -> Int4,
        years_active -> Int4,
        admin_id -> Int8,
    }
}

diesel::table! {
    /// Job postings; the owning company cannot be deleted while rows exist.
    job_postings (id) {
        id -> Int8,
        title -> Text,
        description -> Text,
        work_mode -> Text,
        salary -> Float8,
        openings -> Int4,
        company_id -> Int8,
    }
}

diesel::table! {
    /// Skill catalogue. `name` is unique.
    skills (id) {
        id -> Int8,
        name -> Text,
    }
}

diesel::table! {
    /// Work history; rows are removed with their user.
    experiences (id) {
        id -> Int8,
        company_name -> Text,
        role -> Text,
        years -> Int4,
        user_id -> Int8,
    }
}

diesel::table! {
    user_skills (user_id, skill_id) {
        user_id -> Int8,
        skill_id -> Int8,
    }
}

diesel::table! {
    job_posting_skills (job_posting_id, skill_id) {
        job_posting_id -> Int8,
        skill_id -> Int8,
    }
}

diesel::table! {
    applications (user_id, job_posting_id) {
        user_id -> Int8,
        job_posting_id -> Int8,
    }
}

diesel::joinable!(companies -> admins (admin_id));
diesel::joinable!(job_postings -> companies (company_id));
diesel::joinable!(experiences -> users (user_id));
diesel::joinable!(user_skills -> users (user_id));
diesel::joinable!(user_skills -> skills (skill_id));
diesel::joinable!(job_posting_skills -> job_postings (job_posting_id));
diesel::joinable!(job_posting_skills -> skills (skill_id));
diesel::joinable!(applications -> users (user_id));
diesel::joinable!(applications -> job_postings (job_posting_id));

diesel::allow_tables_to_appear_in_same_query!(
    admins,
    users,
    companies,
    job_postings,
    skills,
    experiences,
    user_skills,
    job_posting_skills,
    applications,
);
