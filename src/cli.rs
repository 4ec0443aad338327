pub mod to_fragment;
