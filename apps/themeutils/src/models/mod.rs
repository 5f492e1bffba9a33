pub mod resume;

pub use resume::{
    Award, Basics, Education, Interest, Language, Location, Profile, Publication, Reference,
    Resume, Skill, Volunteer, Work,
};
