pub mod profession;
