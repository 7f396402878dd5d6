use async_trait::async_trait;
use auth::PasswordError;
use auth::PasswordHasher;

use crate::domain::staff::errors::AuthError;
use crate::domain::staff::models::Role;
use crate::domain::staff::models::StaffMember;
use crate::domain::staff::ports::StaffDirectory;

/// Password shared by every mock staff account.
pub const DEFAULT_PASSWORD: &str = "nursing123";

struct RosterEntry {
    id: &'static str,
    email: &'static str,
    role: Role,
    staff_id: &'static str,
    first_name: &'static str,
    last_name: &'static str,
}

const ROSTER: &[RosterEntry] = &[
    RosterEntry {
        id: "user_1001",
        email: "anna.virtanen@nursinghome.com",
        role: Role::Nurse,
        staff_id: "S0001",
        first_name: "Anna",
        last_name: "Virtanen",
    },
    RosterEntry {
        id: "user_1002",
        email: "liisa.korhonen@nursinghome.com",
        role: Role::CareAssistant,
        staff_id: "S0002",
        first_name: "Liisa",
        last_name: "Korhonen",
    },
    RosterEntry {
        id: "user_1003",
        email: "jukka.makinen@nursinghome.com",
        role: Role::Doctor,
        staff_id: "S0003",
        first_name: "Jukka",
        last_name: "Mäkinen",
    },
    RosterEntry {
        id: "user_1004",
        email: "maria.nieminen@nursinghome.com",
        role: Role::HeadNurse,
        staff_id: "S0004",
        first_name: "Maria",
        last_name: "Nieminen",
    },
    RosterEntry {
        id: "user_1005",
        email: "pekka.laine@nursinghome.com",
        role: Role::Physiotherapist,
        staff_id: "S0005",
        first_name: "Pekka",
        last_name: "Laine",
    },
    RosterEntry {
        id: "user_1006",
        email: "sari.koskinen@nursinghome.com",
        role: Role::Nurse,
        staff_id: "S0006",
        first_name: "Sari",
        last_name: "Koskinen",
    },
    RosterEntry {
        id: "user_1007",
        email: "mikko.heikkinen@nursinghome.com",
        role: Role::CareAssistant,
        staff_id: "S0007",
        first_name: "Mikko",
        last_name: "Heikkinen",
    },
    RosterEntry {
        id: "user_1008",
        email: "kaisa.jarvinen@nursinghome.com",
        role: Role::Psychologist,
        staff_id: "S0008",
        first_name: "Kaisa",
        last_name: "Järvinen",
    },
    RosterEntry {
        id: "user_1009",
        email: "timo.lehtonen@nursinghome.com",
        role: Role::Doctor,
        staff_id: "S0009",
        first_name: "Timo",
        last_name: "Lehtonen",
    },
    RosterEntry {
        id: "user_1010",
        email: "hanna.salo@nursinghome.com",
        role: Role::SocialWorker,
        staff_id: "S0010",
        first_name: "Hanna",
        last_name: "Salo",
    },
    RosterEntry {
        id: "user_1011",
        email: "juha.rantanen@nursinghome.com",
        role: Role::Pharmacist,
        staff_id: "S0011",
        first_name: "Juha",
        last_name: "Rantanen",
    },
    RosterEntry {
        id: "user_1012",
        email: "maija.tuominen@nursinghome.com",
        role: Role::Radiographer,
        staff_id: "S0012",
        first_name: "Maija",
        last_name: "Tuominen",
    },
    RosterEntry {
        id: "user_1013",
        email: "eero.laaksonen@nursinghome.com",
        role: Role::Nurse,
        staff_id: "S0013",
        first_name: "Eero",
        last_name: "Laaksonen",
    },
    RosterEntry {
        id: "user_1014",
        email: "pirjo.makela@nursinghome.com",
        role: Role::CareAssistant,
        staff_id: "S0014",
        first_name: "Pirjo",
        last_name: "Mäkelä",
    },
    // Additional nurses for 24/7 coverage
    RosterEntry {
        id: "user_1015",
        email: "laura.virtamo@nursinghome.com",
        role: Role::Nurse,
        staff_id: "S0015",
        first_name: "Laura",
        last_name: "Virtamo",
    },
    RosterEntry {
        id: "user_1016",
        email: "mika.saarinen@nursinghome.com",
        role: Role::Nurse,
        staff_id: "S0016",
        first_name: "Mika",
        last_name: "Saarinen",
    },
    RosterEntry {
        id: "user_1017",
        email: "tiina.aho@nursinghome.com",
        role: Role::Nurse,
        staff_id: "S0017",
        first_name: "Tiina",
        last_name: "Aho",
    },
    RosterEntry {
        id: "user_1018",
        email: "kari.maenpaa@nursinghome.com",
        role: Role::Janitor,
        staff_id: "S0018",
        first_name: "Kari",
        last_name: "Mäenpää",
    },
    RosterEntry {
        id: "user_1019",
        email: "tuula.virtanen@nursinghome.com",
        role: Role::CookCleaner,
        staff_id: "S0019",
        first_name: "Tuula",
        last_name: "Virtanen",
    },
    RosterEntry {
        id: "user_admin",
        email: "admin@nursinghome.com",
        role: Role::Admin,
        staff_id: "ADMIN001",
        first_name: "Admin",
        last_name: "User",
    },
];

impl RosterEntry {
    fn to_member(&self, password_hash: &str) -> StaffMember {
        StaffMember {
            id: self.id.to_string(),
            email: self.email.to_string(),
            password_hash: password_hash.to_string(),
            role: self.role,
            staff_id: self.staff_id.to_string(),
            first_name: self.first_name.to_string(),
            last_name: self.last_name.to_string(),
        }
    }
}

/// Fixed, process-local staff directory.
///
/// Immutable once built, so it is shared across request handlers without locking.
#[derive(Debug, Clone)]
pub struct MockStaffDirectory {
    members: Vec<StaffMember>,
}

impl MockStaffDirectory {
    /// Build the mock roster with every account sharing one password.
    ///
    /// The password is hashed once and the hash assigned to every entry.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing failed
    pub fn seed(hasher: &PasswordHasher, password: &str) -> Result<Self, PasswordError> {
        let password_hash = hasher.hash(password)?;

        let members = ROSTER
            .iter()
            .map(|entry| entry.to_member(&password_hash))
            .collect();

        Ok(Self { members })
    }

    /// Directory over an explicit set of members.
    pub fn from_members(members: Vec<StaffMember>) -> Self {
        Self { members }
    }

    /// All members, in roster order.
    pub fn members(&self) -> &[StaffMember] {
        &self.members
    }
}

#[async_trait]
impl StaffDirectory for MockStaffDirectory {
    async fn find_by_email(&self, email: &str) -> Result<Option<StaffMember>, AuthError> {
        Ok(self
            .members
            .iter()
            .find(|member| member.email == email)
            .cloned())
    }
}
