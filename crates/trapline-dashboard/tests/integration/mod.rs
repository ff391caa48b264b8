mod refresh;
mod submit;
