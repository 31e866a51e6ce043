use async_graphql::{ID, InputObject, SimpleObject};
use usergraph_core::user::{User, UserPatch};

/// A user of the service.
#[derive(SimpleObject, Clone, Debug, PartialEq)]
#[graphql(name = "User")]
pub struct UserObject {
    pub id: ID,
    pub name: String,
    pub bio: Option<String>,
}

impl From<User> for UserObject {
    fn from(user: User) -> Self {
        UserObject {
            id: ID(user.id),
            name: user.name,
            bio: user.bio,
        }
    }
}

/// Fields of a user. On update, only the fields supplied are changed.
#[derive(InputObject, Clone, Debug, Default)]
pub struct UserInput {
    pub name: Option<String>,
    pub bio: Option<String>,
}

impl From<UserInput> for UserPatch {
    fn from(input: UserInput) -> Self {
        UserPatch {
            name: input.name,
            bio: input.bio,
        }
    }
}
