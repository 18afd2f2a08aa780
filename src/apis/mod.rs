pub mod easy_kinematics;
